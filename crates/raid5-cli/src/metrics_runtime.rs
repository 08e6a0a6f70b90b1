use std::sync::Arc;

use tracing::debug;

use raid5_rs::metrics::{ClusterOp, MetricsSink, install_metrics_sink};

/// TracingSink forwards every engine operation to the log.
pub struct TracingSink;

impl MetricsSink for TracingSink {
    fn record_cluster_op(&self, op: ClusterOp) {
        debug!(
            op = ?op.op,
            discs = op.discs,
            rows = op.rows,
            bits = op.bits,
            latency_us = op.latency_seconds * 1e6,
            error = op.error,
            "engine op"
        );
    }
}

pub fn install() -> bool {
    install_metrics_sink(Arc::new(TracingSink))
}
