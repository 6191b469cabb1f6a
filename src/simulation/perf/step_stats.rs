use wasm_bindgen::prelude::*;

use super::step::StepReport;

/// Counters for the last frame (zeros when stats are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct StepStats {
    pub(super) frame_ms: f64,
    pub(super) substeps: u32,
    pub(super) substeps_dropped: u32,
    pub(super) bodies_integrated: u32,
    pub(super) contacts_resolved: u32,
    pub(super) resolution_passes: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }

    pub(crate) fn record(&mut self, report: &StepReport) {
        self.substeps += 1;
        self.bodies_integrated += report.bodies_integrated;
        self.contacts_resolved += report.contacts_resolved;
        self.resolution_passes += report.resolution_passes;
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn substeps_dropped(&self) -> u32 { self.substeps_dropped }
    #[wasm_bindgen(getter)]
    pub fn bodies_integrated(&self) -> u32 { self.bodies_integrated }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
    #[wasm_bindgen(getter)]
    pub fn resolution_passes(&self) -> u32 { self.resolution_passes }
}
