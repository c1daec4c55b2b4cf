use crate::models::ChartType;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// A change made to one of the two selection controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Option value of the year control: `all` or a year label.
    YearSelected(String),
    ChartTypeSelected(ChartType),
}

pub fn channel() -> (UnboundedSender<UiEvent>, UnboundedReceiver<UiEvent>) {
    unbounded_channel()
}
