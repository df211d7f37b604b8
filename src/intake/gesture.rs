use super::FileHandle;

/// The closed set of drag lifecycle phases a host can deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// A drag moved into the drop zone.
    Enter,
    /// A drag is still over the drop zone.
    Over,
    /// A drag left the drop zone without dropping.
    Leave,
    /// A drag was released over the drop zone.
    Drop,
}

/// View over a single host gesture event.
///
/// Mirrors what the widget needs from a native event object and nothing
/// more: cancel the host's default action, keep the event from travelling
/// past the zone, and read the dropped payload.
pub trait GestureEvent {
    /// Which lifecycle phase this event represents.
    fn phase(&self) -> GesturePhase;

    /// Cancel the host's default action for the event (opening or
    /// navigating to the dropped file).
    fn suppress_default(&mut self);

    /// Keep the event from propagating beyond the drop zone.
    fn stop_propagation(&mut self);

    /// Take the files carried by the event. Meaningful only for
    /// [`GesturePhase::Drop`]; the caller receives ownership and the event
    /// is left empty.
    fn take_files(&mut self) -> Vec<FileHandle>;
}
