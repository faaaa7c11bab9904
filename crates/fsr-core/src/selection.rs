//! Selected pads, live thresholds and the latest sample.

use crate::error::{CoreError, CoreResult};
use crate::ring_buffer::Sample;
use fnv::FnvHashMap;

/// Per-pad threshold values, arity fixed to the pad registry.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdTable {
    values: Vec<f32>,
}

impl ThresholdTable {
    pub fn filled(len: usize, value: f32) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    pub fn from_vec(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.values.clone()
    }
}

/// Which pads are selected, plus the "now" view of telemetry.
///
/// `toggle` is the only way selection changes. Readers use `is_selected` or
/// `selected`; they never mutate the set directly.
#[derive(Clone, Debug)]
pub struct SelectionModel {
    pad_names: Vec<String>,
    index_by_name: FnvHashMap<String, usize>,
    selected: Vec<bool>,
    highlighted: Vec<bool>,
    defaults: ThresholdTable,
    thresholds: ThresholdTable,
    latest: Option<Sample>,
}

impl SelectionModel {
    /// `defaults` stand in for the table until the first `thresholds` frame
    /// and must match the pad count.
    pub fn new(pad_names: Vec<String>, defaults: ThresholdTable) -> CoreResult<Self> {
        CoreError::check_arity(pad_names.len(), defaults.len())?;
        let index_by_name = pad_names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        let n = pad_names.len();
        Ok(Self {
            pad_names,
            index_by_name,
            selected: vec![false; n],
            highlighted: vec![false; n],
            thresholds: defaults.clone(),
            defaults,
            latest: None,
        })
    }

    pub fn pad_count(&self) -> usize {
        self.pad_names.len()
    }

    pub fn pad_names(&self) -> &[String] {
        &self.pad_names
    }

    pub fn pad_index(&self, name: &str) -> Option<usize> {
        self.index_by_name.get(name).copied()
    }

    /// Flip membership of `pad`; returns whether it is now selected.
    pub fn toggle(&mut self, pad: &str) -> CoreResult<bool> {
        let i = self
            .pad_index(pad)
            .ok_or_else(|| CoreError::UnknownPad(pad.to_string()))?;
        let now = !self.selected[i];
        self.selected[i] = now;
        self.highlighted[i] = now;
        Ok(now)
    }

    pub fn is_selected(&self, pad: &str) -> bool {
        self.pad_index(pad).is_some_and(|i| self.selected[i])
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.get(index).copied().unwrap_or(false)
    }

    /// Selected pads as `(index, name)` in registry order.
    pub fn selected(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.pad_names
            .iter()
            .enumerate()
            .filter(|(i, _)| self.selected[*i])
            .map(|(i, n)| (i, n.as_str()))
    }

    /// Replace the whole table. Arity must match the registry.
    pub fn apply_thresholds(&mut self, values: &[f32]) -> CoreResult<()> {
        CoreError::check_arity(self.pad_count(), values.len())?;
        self.thresholds = ThresholdTable::from_vec(values.to_vec());
        Ok(())
    }

    /// Store the most recent sample. Arity must match the registry.
    pub fn apply_sample(&mut self, values: &[f32]) -> CoreResult<()> {
        CoreError::check_arity(self.pad_count(), values.len())?;
        self.latest = Some(values.to_vec());
        Ok(())
    }

    /// Local edit of one threshold; returns the full table to send upstream.
    pub fn edit_threshold(&mut self, index: usize, value: f32) -> CoreResult<Vec<f32>> {
        let len = self.thresholds.len();
        let slot = self
            .thresholds
            .values
            .get_mut(index)
            .ok_or(CoreError::PadIndexOutOfRange { index, len })?;
        *slot = value;
        Ok(self.thresholds.to_vec())
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    pub fn latest(&self) -> Option<&[f32]> {
        self.latest.as_deref()
    }

    /// Drop selection, highlights and the sample; thresholds go back to the
    /// defaults. Used when the connection ends.
    pub fn reset(&mut self) {
        self.selected.iter_mut().for_each(|s| *s = false);
        self.highlighted.iter_mut().for_each(|h| *h = false);
        self.thresholds = self.defaults.clone();
        self.latest = None;
    }
}
