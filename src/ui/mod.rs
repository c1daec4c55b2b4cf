mod canvas;
mod events;
mod page;

pub use canvas::{Canvas, ChartBackend, InstanceId, LiveChart, MountTarget};
pub use events::{channel, UiEvent};
pub use page::{
    LoadPhase, Page, SelectControl, SelectOption, StatSlot, StatSlots, TableBody, TableRow,
    ALL_YEARS, CHART_TYPE_ID, LOAD_ERROR_MESSAGE, YEAR_FILTER_ID,
};
