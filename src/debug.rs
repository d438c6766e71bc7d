/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and simulation counters to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second) and frame time
 * - Simulation ticks run in the last frame
 * - Live body and particle counts
 * - Lifetime merge and eviction totals
 */

use std::time::Duration;

use crate::simulation::TickReport;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_per_frame: usize,
    pub body_count: usize,
    pub particle_count: usize,
    pub bodies_created: usize,
    pub total_merges: usize,
    pub total_evictions: usize,
}

impl DebugInfo {
    // Fold one tick's report into the running totals
    pub fn record(&mut self, report: &TickReport) {
        self.bodies_created += usize::from(report.created.is_some());
        self.total_merges += report.merges.len();
        self.total_evictions += report.evictions.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyId;

    #[test]
    fn record_accumulates_counts() {
        let mut info = DebugInfo::default();
        let report = TickReport {
            created: Some(BodyId(3)),
            ..Default::default()
        };

        info.record(&report);
        info.record(&TickReport::default());

        assert_eq!(info.bodies_created, 1);
        assert_eq!(info.total_merges, 0);
    }
}
