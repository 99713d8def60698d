//! Dashboard View State
//!
//! The dashboard page is a function of one fetch outcome. [`FetchState`]
//! captures that outcome independent of how it was obtained (Leptos resource,
//! test fixture), and [`DashboardView`] is the single branch the page renders.

use super::indicator::EconomicIndicator;

/// Number of placeholder cards shown while loading
pub const LOADING_PLACEHOLDERS: usize = 11;

/// Outcome of the indicator list fetch
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    /// Request in flight (initial load or retry)
    Pending,
    /// Request failed, with the failure message
    Failed(String),
    /// Request succeeded
    Resolved(T),
}

impl<T> FetchState<T> {
    /// Build from a resource's loading flag and current value
    ///
    /// A loading resource is `Pending` even if it still holds an older value,
    /// so a retry shows the loading view instead of the stale result.
    pub fn from_resource(loading: bool, value: Option<Result<T, String>>) -> Self {
        match (loading, value) {
            (true, _) | (false, None) => FetchState::Pending,
            (false, Some(Ok(v))) => FetchState::Resolved(v),
            (false, Some(Err(e))) => FetchState::Failed(e),
        }
    }
}

/// The four mutually exclusive dashboard views
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView {
    Loading { placeholders: usize },
    Error { message: Option<String> },
    Empty,
    Populated { indicators: Vec<EconomicIndicator> },
}

impl DashboardView {
    pub fn from_fetch(state: FetchState<Vec<EconomicIndicator>>) -> Self {
        match state {
            FetchState::Pending => DashboardView::Loading {
                placeholders: LOADING_PLACEHOLDERS,
            },
            FetchState::Failed(message) => {
                let message = message.trim();
                DashboardView::Error {
                    message: (!message.is_empty()).then(|| message.to_string()),
                }
            }
            FetchState::Resolved(indicators) if indicators.is_empty() => DashboardView::Empty,
            FetchState::Resolved(indicators) => DashboardView::Populated { indicators },
        }
    }

    /// Header label ("11 indicadores"), only when there is a grid to count
    pub fn count_label(&self) -> Option<String> {
        match self {
            DashboardView::Populated { indicators } => {
                Some(format!("{} indicadores", indicators.len()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(id: &str) -> EconomicIndicator {
        EconomicIndicator {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            data: Vec::new(),
            unit: None,
            trend: None,
        }
    }

    #[test]
    fn test_pending_is_loading_with_placeholders() {
        let view = DashboardView::from_fetch(FetchState::Pending);
        assert_eq!(view, DashboardView::Loading { placeholders: 11 });
        assert_eq!(view.count_label(), None);
    }

    #[test]
    fn test_failed_is_error_with_message() {
        let view = DashboardView::from_fetch(FetchState::Failed("Network error: timeout".into()));
        assert_eq!(
            view,
            DashboardView::Error {
                message: Some("Network error: timeout".to_string())
            }
        );
    }

    #[test]
    fn test_failed_without_message() {
        let view = DashboardView::from_fetch(FetchState::Failed("  ".into()));
        assert_eq!(view, DashboardView::Error { message: None });
    }

    #[test]
    fn test_empty_list_is_empty_view() {
        let view = DashboardView::from_fetch(FetchState::Resolved(Vec::new()));
        assert_eq!(view, DashboardView::Empty);
    }

    #[test]
    fn test_populated_counts_every_element() {
        let list = vec![indicator("a"), indicator("b"), indicator("c")];
        let view = DashboardView::from_fetch(FetchState::Resolved(list.clone()));

        assert_eq!(view.count_label().as_deref(), Some("3 indicadores"));
        match view {
            DashboardView::Populated { indicators } => assert_eq!(indicators, list),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_from_resource() {
        let ok: Option<Result<Vec<u8>, String>> = Some(Ok(vec![1]));

        assert_eq!(FetchState::<Vec<u8>>::from_resource(false, None), FetchState::Pending);
        assert_eq!(FetchState::from_resource(true, ok.clone()), FetchState::Pending);
        assert_eq!(FetchState::from_resource(false, ok), FetchState::Resolved(vec![1]));
        assert_eq!(
            FetchState::<Vec<u8>>::from_resource(false, Some(Err("x".into()))),
            FetchState::Failed("x".into())
        );
    }
}
