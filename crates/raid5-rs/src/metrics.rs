use std::sync::{Arc, OnceLock};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpKind {
    Save,
    Parity,
    Read,
    Damage,
    Recover,
}

#[derive(Copy, Clone, Debug)]
pub struct ClusterOp {
    pub op: OpKind,
    pub discs: usize,
    pub rows: usize,
    pub bits: usize,
    pub latency_seconds: f64,
    pub error: bool,
}

pub trait MetricsSink: Send + Sync + 'static {
    fn record_cluster_op(&self, op: ClusterOp);
}

static METRICS_SINK: OnceLock<Arc<dyn MetricsSink>> = OnceLock::new();

pub fn install_metrics_sink(sink: Arc<dyn MetricsSink>) -> bool {
    METRICS_SINK.set(sink).is_ok()
}

pub fn is_enabled() -> bool {
    METRICS_SINK.get().is_some()
}

pub fn record_cluster_op(op: ClusterOp) {
    if let Some(sink) = METRICS_SINK.get() {
        sink.record_cluster_op(op);
    }
}
