use std::rc::Rc;

use yew::functional::Reducible;

use crate::api::{ApiError, PageQuery};
use crate::models::{ClientDashboardResponse, PaginatedResponse};

pub const PAGE_SIZE: u32 = 10;

pub fn page_count(total: u32, page_size: u32) -> u32 {
    ((total + page_size - 1) / page_size).max(1)
}

/// Optional date window. Both bounds are ISO calendar dates, which order
/// lexicographically, so the range check is a plain string comparison.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DateFilters {
    pub from_date: String,
    pub to_date: String,
}

impl DateFilters {
    pub fn validate(&self) -> Result<(), String> {
        if !self.from_date.is_empty() && !self.to_date.is_empty() && self.from_date > self.to_date {
            return Err("From date must be before To date.".to_string());
        }
        Ok(())
    }

    pub fn from_param(&self) -> Option<String> {
        if self.from_date.is_empty() {
            None
        } else {
            Some(self.from_date.clone())
        }
    }

    pub fn to_param(&self) -> Option<String> {
        if self.to_date.is_empty() {
            None
        } else {
            Some(self.to_date.clone())
        }
    }
}

/// State machine behind every paginated ledger view. The hosting component
/// dispatches `Started` with a fresh ticket when it kicks off a fetch and
/// `Loaded` with the same ticket when the response lands; a `Loaded` whose
/// ticket is no longer the latest is dropped, so a slow response can never
/// overwrite a newer one.
#[derive(Clone, PartialEq, Debug)]
pub struct ListState<T: Clone> {
    pub items: Vec<T>,
    pub page: u32,
    pub total: u32,
    pub applied: DateFilters,
    pub loading: bool,
    pub error: Option<ApiError>,
    nonce: u32,
    ticket: u32,
}

impl<T: Clone> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total: 0,
            applied: DateFilters::default(),
            loading: true,
            error: None,
            nonce: 0,
            ticket: 0,
        }
    }
}

impl<T: Clone> ListState<T> {
    pub fn page_count(&self) -> u32 {
        page_count(self.total, PAGE_SIZE)
    }

    /// Inputs that must trigger a re-fetch when any of them changes.
    pub fn fetch_key(&self) -> (u32, DateFilters, u32) {
        (self.page, self.applied.clone(), self.nonce)
    }

    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            page_size: PAGE_SIZE,
            from_date: self.applied.from_param(),
            to_date: self.applied.to_param(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.error.as_ref().map(ApiError::is_not_found).unwrap_or(false)
    }
}

pub enum ListAction<T: Clone> {
    Started {
        ticket: u32,
    },
    Loaded {
        ticket: u32,
        result: Result<PaginatedResponse<T>, ApiError>,
    },
    PrevPage,
    NextPage,
    ApplyFilters(DateFilters),
    /// Jump back to page 1 and force a re-fetch even if already there.
    Refresh,
}

impl<T: Clone + 'static> Reducible for ListState<T> {
    type Action = ListAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ListAction::Started { ticket } => {
                let mut next = (*self).clone();
                next.loading = true;
                next.ticket = ticket;
                Rc::new(next)
            }
            ListAction::Loaded { ticket, result } => {
                if ticket != self.ticket {
                    // Stale response from a superseded fetch.
                    return self;
                }
                let mut next = (*self).clone();
                next.loading = false;
                match result {
                    Ok(response) => {
                        next.items = response.items;
                        next.total = response.total;
                        next.error = None;
                    }
                    Err(error) => {
                        if error.is_not_found() {
                            next.items.clear();
                            next.total = 0;
                        }
                        next.error = Some(error);
                    }
                }
                Rc::new(next)
            }
            ListAction::PrevPage => {
                if self.page <= 1 {
                    return self;
                }
                let mut next = (*self).clone();
                next.page -= 1;
                Rc::new(next)
            }
            ListAction::NextPage => {
                if self.page >= self.page_count() {
                    return self;
                }
                let mut next = (*self).clone();
                next.page += 1;
                Rc::new(next)
            }
            ListAction::ApplyFilters(filters) => {
                let mut next = (*self).clone();
                next.applied = filters;
                next.page = 1;
                Rc::new(next)
            }
            ListAction::Refresh => {
                let mut next = (*self).clone();
                next.page = 1;
                next.nonce = next.nonce.wrapping_add(1);
                Rc::new(next)
            }
        }
    }
}

/// Dashboard aggregate controller: same fetch/discard/error policy as the
/// list controller, minus pagination.
#[derive(Clone, PartialEq, Debug)]
pub struct SummaryState {
    pub data: Option<ClientDashboardResponse>,
    pub applied: DateFilters,
    pub loading: bool,
    pub error: Option<ApiError>,
    ticket: u32,
}

impl Default for SummaryState {
    fn default() -> Self {
        Self {
            data: None,
            applied: DateFilters::default(),
            loading: true,
            error: None,
            ticket: 0,
        }
    }
}

impl SummaryState {
    pub fn fetch_key(&self) -> DateFilters {
        self.applied.clone()
    }

    pub fn is_not_found(&self) -> bool {
        self.error.as_ref().map(ApiError::is_not_found).unwrap_or(false)
    }
}

pub enum SummaryAction {
    Started {
        ticket: u32,
    },
    Loaded {
        ticket: u32,
        result: Result<ClientDashboardResponse, ApiError>,
    },
    ApplyFilters(DateFilters),
}

impl Reducible for SummaryState {
    type Action = SummaryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SummaryAction::Started { ticket } => {
                let mut next = (*self).clone();
                next.loading = true;
                next.ticket = ticket;
                Rc::new(next)
            }
            SummaryAction::Loaded { ticket, result } => {
                if ticket != self.ticket {
                    return self;
                }
                let mut next = (*self).clone();
                next.loading = false;
                match result {
                    Ok(response) => {
                        next.data = Some(response);
                        next.error = None;
                    }
                    Err(error) => {
                        if error.is_not_found() {
                            next.data = None;
                        }
                        next.error = Some(error);
                    }
                }
                Rc::new(next)
            }
            SummaryAction::ApplyFilters(filters) => {
                let mut next = (*self).clone();
                next.applied = filters;
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientDashboardSummary, DashboardOrgClient};

    fn page(items: Vec<u32>, total: u32) -> Result<PaginatedResponse<u32>, ApiError> {
        Ok(PaginatedResponse {
            items,
            total,
            page: 1,
            page_size: PAGE_SIZE,
        })
    }

    fn http_error(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: format!("Request failed with status {}", status),
            errors: Vec::new(),
        }
    }

    fn dashboard(code: &str) -> ClientDashboardResponse {
        ClientDashboardResponse {
            org_client: DashboardOrgClient {
                id: "1".to_string(),
                code: code.to_string(),
                name: "Acme Corporation".to_string(),
            },
            summary: ClientDashboardSummary {
                total_topup: 500.0,
                total_spend: 120.0,
                sisa_saldo: 380.0,
                currency: "USD".to_string(),
            },
            latest_campaign_reports: Vec::new(),
            latest_topups: Vec::new(),
        }
    }

    #[test]
    fn page_count_rounds_up_and_never_drops_below_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 10), 10);
    }

    #[test]
    fn prev_page_is_a_no_op_on_page_one() {
        let state = Rc::new(ListState::<u32>::default());
        let next = state.clone().reduce(ListAction::PrevPage);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn next_page_is_a_no_op_on_the_last_page() {
        let state = Rc::new(ListState::<u32>::default());
        let state = state.reduce(ListAction::Started { ticket: 1 });
        let state = state.reduce(ListAction::Loaded {
            ticket: 1,
            result: page(vec![1, 2, 3], 3),
        });
        assert_eq!(state.page_count(), 1);
        let next = state.clone().reduce(ListAction::NextPage);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn paging_moves_within_bounds() {
        let state = Rc::new(ListState::<u32>::default());
        let state = state.reduce(ListAction::Started { ticket: 1 });
        let state = state.reduce(ListAction::Loaded {
            ticket: 1,
            result: page((1..=10).collect(), 25),
        });
        assert_eq!(state.page_count(), 3);
        let state = state.reduce(ListAction::NextPage);
        assert_eq!(state.page, 2);
        let state = state.reduce(ListAction::NextPage);
        let state = state.reduce(ListAction::NextPage);
        assert_eq!(state.page, 3, "next clamps at page_count");
        let state = state.reduce(ListAction::PrevPage);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn stale_responses_are_discarded_out_of_order() {
        let state = Rc::new(ListState::<u32>::default());
        // Two fetches start; the first resolves after the second.
        let state = state.reduce(ListAction::Started { ticket: 1 });
        let state = state.reduce(ListAction::Started { ticket: 2 });
        let state = state.reduce(ListAction::Loaded {
            ticket: 2,
            result: page(vec![20, 21], 2),
        });
        let state = state.reduce(ListAction::Loaded {
            ticket: 1,
            result: page(vec![10, 11, 12], 3),
        });
        assert_eq!(state.items, vec![20, 21]);
        assert_eq!(state.total, 2);
        assert!(!state.loading);
    }

    #[test]
    fn not_found_clears_the_list_and_total() {
        let state = Rc::new(ListState::<u32>::default());
        let state = state.reduce(ListAction::Started { ticket: 1 });
        let state = state.reduce(ListAction::Loaded {
            ticket: 1,
            result: page(vec![1, 2], 12),
        });
        let state = state.reduce(ListAction::Started { ticket: 2 });
        let state = state.reduce(ListAction::Loaded {
            ticket: 2,
            result: Err(http_error(404)),
        });
        assert!(state.items.is_empty());
        assert_eq!(state.total, 0);
        assert!(state.is_not_found());
    }

    #[test]
    fn other_errors_preserve_previously_loaded_data() {
        let state = Rc::new(ListState::<u32>::default());
        let state = state.reduce(ListAction::Started { ticket: 1 });
        let state = state.reduce(ListAction::Loaded {
            ticket: 1,
            result: page(vec![1, 2], 12),
        });
        let state = state.reduce(ListAction::Started { ticket: 2 });
        let state = state.reduce(ListAction::Loaded {
            ticket: 2,
            result: Err(http_error(500)),
        });
        assert_eq!(state.items, vec![1, 2]);
        assert_eq!(state.total, 12);
        assert!(state.error.is_some());
        assert!(!state.is_not_found());
    }

    #[test]
    fn applying_filters_resets_to_page_one_and_changes_the_fetch_key() {
        let state = Rc::new(ListState::<u32>::default());
        let state = state.reduce(ListAction::Started { ticket: 1 });
        let state = state.reduce(ListAction::Loaded {
            ticket: 1,
            result: page((1..=10).collect(), 30),
        });
        let state = state.reduce(ListAction::NextPage);
        let before = state.fetch_key();
        let filters = DateFilters {
            from_date: "2026-01-01".to_string(),
            to_date: "2026-01-31".to_string(),
        };
        let state = state.reduce(ListAction::ApplyFilters(filters.clone()));
        assert_eq!(state.page, 1);
        assert_eq!(state.applied, filters);
        assert_ne!(state.fetch_key(), before);
    }

    #[test]
    fn invalid_date_ranges_are_rejected_without_touching_the_fetch_key() {
        let filters = DateFilters {
            from_date: "2026-02-01".to_string(),
            to_date: "2026-01-01".to_string(),
        };
        assert!(filters.validate().is_err());
        // The page never dispatches ApplyFilters on a failed validation,
        // so the fetch key stays put and no request fires.
        let state = Rc::new(ListState::<u32>::default());
        assert_eq!(state.fetch_key(), state.fetch_key());
    }

    #[test]
    fn valid_and_open_ended_ranges_pass_validation() {
        assert!(DateFilters::default().validate().is_ok());
        let open_ended = DateFilters {
            from_date: "2026-01-01".to_string(),
            to_date: String::new(),
        };
        assert!(open_ended.validate().is_ok());
        let ordered = DateFilters {
            from_date: "2026-01-01".to_string(),
            to_date: "2026-01-31".to_string(),
        };
        assert!(ordered.validate().is_ok());
    }

    #[test]
    fn refresh_resets_the_page_and_forces_a_new_fetch_key() {
        let state = Rc::new(ListState::<u32>::default());
        let state = state.reduce(ListAction::Started { ticket: 1 });
        let state = state.reduce(ListAction::Loaded {
            ticket: 1,
            result: page((1..=10).collect(), 30),
        });
        let state = state.reduce(ListAction::NextPage);
        let before = state.fetch_key();
        let state = state.reduce(ListAction::Refresh);
        assert_eq!(state.page, 1);
        assert_ne!(state.fetch_key(), before);

        // Already on page 1 the key still changes, guaranteeing a re-fetch
        // after a successful create.
        let before = state.fetch_key();
        let state = state.reduce(ListAction::Refresh);
        assert_eq!(state.page, 1);
        assert_ne!(state.fetch_key(), before);
    }

    #[test]
    fn summary_discards_stale_responses() {
        let state = Rc::new(SummaryState::default());
        let state = state.reduce(SummaryAction::Started { ticket: 1 });
        let state = state.reduce(SummaryAction::Started { ticket: 2 });
        let state = state.reduce(SummaryAction::Loaded {
            ticket: 2,
            result: Ok(dashboard("ACME")),
        });
        let state = state.reduce(SummaryAction::Loaded {
            ticket: 1,
            result: Ok(dashboard("STALE")),
        });
        assert_eq!(state.data.as_ref().unwrap().org_client.code, "ACME");
    }

    #[test]
    fn summary_not_found_drops_the_document_but_other_errors_keep_it() {
        let state = Rc::new(SummaryState::default());
        let state = state.reduce(SummaryAction::Started { ticket: 1 });
        let state = state.reduce(SummaryAction::Loaded {
            ticket: 1,
            result: Ok(dashboard("ACME")),
        });
        let state = state.reduce(SummaryAction::Started { ticket: 2 });
        let state = state.reduce(SummaryAction::Loaded {
            ticket: 2,
            result: Err(http_error(500)),
        });
        assert!(state.data.is_some(), "transient failure keeps the summary");

        let state = state.reduce(SummaryAction::Started { ticket: 3 });
        let state = state.reduce(SummaryAction::Loaded {
            ticket: 3,
            result: Err(http_error(404)),
        });
        assert!(state.data.is_none());
        assert!(state.is_not_found());
    }
}
