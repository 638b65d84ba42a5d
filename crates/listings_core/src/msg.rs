#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Begin the sweep at page index 0.
    Start,
    /// Every fetch of the in-flight wave has settled.
    WaveSettled { yielded: u64 },
}
