//! View model behind the readout panel.
//!
//! Owns the sample history, the selection model and the smoothing filters.
//! The browser layer only reads [`Dashboard::readout`] and forwards user
//! edits; it never touches the parts directly.

use crate::config::DashboardConfig;
use crate::connection::{ConnectionManager, Transport};
use crate::constants::{FORCE_MAX, FORCE_MIN};
use crate::error::CoreResult;
use crate::protocol::{Inbound, Outbound, TAG_THRESHOLDS, TAG_VALUES};
use crate::ring_buffer::{RingBuffer, Sample};
use crate::selection::SelectionModel;
use crate::smoothing::HullMovingAverage;
use std::cell::RefCell;
use std::rc::Rc;

/// One row of the readout panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PadReadout {
    pub index: usize,
    pub name: String,
    pub threshold: f32,
    /// Raw value from the latest sample, if any arrived yet.
    pub force: Option<f32>,
    pub smoothed: Option<f32>,
    /// Whether the latest raw value is at or above the threshold.
    pub triggered: bool,
}

pub struct Dashboard {
    config: DashboardConfig,
    history: RingBuffer<Sample>,
    selection: SelectionModel,
    filters: Vec<HullMovingAverage>,
    smoothed: Option<Vec<f32>>,
    panel_open: bool,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> CoreResult<Self> {
        config.validate()?;
        let selection = SelectionModel::new(config.pad_names.clone(), config.default_thresholds())?;
        let filters = (0..config.pad_names.len())
            .map(|_| HullMovingAverage::new(config.smoothing_window))
            .collect();
        Ok(Self {
            history: RingBuffer::with_capacity(config.ring_buffer_capacity),
            selection,
            filters,
            smoothed: None,
            panel_open: false,
            config,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionModel {
        &mut self.selection
    }

    pub fn history(&self) -> &RingBuffer<Sample> {
        &self.history
    }

    /// A new connection starts with empty history sized from config.
    pub fn on_connected(&mut self) {
        self.history.reset_capacity(self.config.ring_buffer_capacity);
        self.filters.iter_mut().for_each(HullMovingAverage::reset);
        self.smoothed = None;
    }

    pub fn on_thresholds(&mut self, values: &[f32]) -> CoreResult<()> {
        self.selection.apply_thresholds(values)
    }

    /// Accept one sample. A wrong arity leaves everything untouched.
    pub fn on_values(&mut self, values: &[f32]) -> CoreResult<()> {
        self.selection.apply_sample(values)?;
        self.history.push(values.to_vec());
        let smoothed = self
            .filters
            .iter_mut()
            .zip(values)
            .map(|(f, v)| f.next(*v))
            .collect();
        self.smoothed = Some(smoothed);
        Ok(())
    }

    /// Edit one threshold locally and build the frame announcing it.
    pub fn edit_threshold(&mut self, index: usize, value: f32) -> CoreResult<Outbound> {
        let thresholds = self.selection.edit_threshold(index, value)?;
        Ok(Outbound::UpdateThreshold { thresholds, index })
    }

    /// Tear down per-connection state after the connection ended.
    pub fn reset(&mut self) {
        self.history.clear();
        self.selection.reset();
        self.filters.iter_mut().for_each(HullMovingAverage::reset);
        self.smoothed = None;
        self.panel_open = false;
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    /// Rows for the selected pads, in registry order.
    pub fn readout(&self) -> Vec<PadReadout> {
        let latest = self.selection.latest();
        let thresholds = self.selection.thresholds();
        self.selection
            .selected()
            .map(|(index, name)| {
                let threshold = thresholds.get(index).unwrap_or(self.config.default_threshold);
                let force = latest.and_then(|s| s.get(index).copied());
                PadReadout {
                    index,
                    name: name.to_string(),
                    threshold,
                    force,
                    smoothed: self.smoothed.as_ref().and_then(|s| s.get(index).copied()),
                    triggered: force.is_some_and(|f| f >= threshold),
                }
            })
            .collect()
    }

    /// One channel of the history, oldest first.
    pub fn channel_history(&self, index: usize) -> impl Iterator<Item = f32> + '_ {
        self.history.iter().filter_map(move |s| s.get(index).copied())
    }
}

/// Position of a force value on the panel's slider.
pub fn slider_value(force: f32) -> f32 {
    force.clamp(FORCE_MIN, FORCE_MAX)
}

/// Route recognized inbound tags into `dashboard`.
pub fn bind_handlers<T: Transport>(
    dashboard: &Rc<RefCell<Dashboard>>,
    connection: &mut ConnectionManager<T>,
) {
    let d = dashboard.clone();
    connection.on(TAG_VALUES, move |frame| match frame {
        Inbound::Values(v) => d.borrow_mut().on_values(v),
        _ => Ok(()),
    });
    let d = dashboard.clone();
    connection.on(TAG_THRESHOLDS, move |frame| match frame {
        Inbound::Thresholds(v) => d.borrow_mut().on_thresholds(v),
        _ => Ok(()),
    });
}
