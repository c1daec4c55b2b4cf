//! The charting collaborator: something that mounts a chart configuration
//! on a target, redraws it after its configuration changed, and tears it down.

use crate::models::ChartConfig;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MountTarget {
    Issuances,
    Retirements,
}

impl MountTarget {
    pub const ALL: [MountTarget; 2] = [MountTarget::Issuances, MountTarget::Retirements];

    pub fn element_id(&self) -> &'static str {
        match self {
            MountTarget::Issuances => "issuancesChart",
            MountTarget::Retirements => "retirementsChart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MountTarget::Issuances => "Issuances Over Time",
            MountTarget::Retirements => "Retirements Over Time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

pub trait ChartBackend {
    fn construct(&mut self, target: MountTarget, config: &ChartConfig) -> InstanceId;
    fn update(&mut self, id: InstanceId, config: &ChartConfig);
    fn destroy(&mut self, id: InstanceId);
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiveChart {
    pub target: MountTarget,
    pub config: ChartConfig,
    pub redraws: u32,
}

/// Keeps every constructed and not yet destroyed chart in memory.
///
/// The canvas never refuses a second chart on a target; keeping a single
/// live instance per target is the renderer's job, and the canvas is what
/// makes a violation visible.
#[derive(Debug, Default)]
pub struct Canvas {
    next_id: u64,
    live: BTreeMap<InstanceId, LiveChart>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_on(&self, target: MountTarget) -> Vec<&LiveChart> {
        self.live.values().filter(|c| c.target == target).collect()
    }

    pub fn get(&self, id: InstanceId) -> Option<&LiveChart> {
        self.live.get(&id)
    }
}

impl ChartBackend for Canvas {
    fn construct(&mut self, target: MountTarget, config: &ChartConfig) -> InstanceId {
        self.next_id += 1;
        let id = InstanceId(self.next_id);
        debug!("Constructing {} chart {:?} on {}", config.chart_type, id, target.element_id());
        self.live.insert(
            id,
            LiveChart {
                target,
                config: config.clone(),
                redraws: 0,
            },
        );
        id
    }

    fn update(&mut self, id: InstanceId, config: &ChartConfig) {
        match self.live.get_mut(&id) {
            Some(chart) => {
                chart.config = config.clone();
                chart.redraws += 1;
            }
            None => debug!("Ignoring update of destroyed chart {:?}", id),
        }
    }

    fn destroy(&mut self, id: InstanceId) {
        if let Some(chart) = self.live.remove(&id) {
            debug!("Destroyed chart {:?} on {}", id, chart.target.element_id());
        }
    }
}
