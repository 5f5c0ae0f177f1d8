use crate::frame::Frame;

/// Source of per-frame hand detections.
///
/// One call yields the frame's full structured result, so there is no
/// hidden state shared between a "process" step and a "query" step.
pub trait Detector {
    /// Next frame, or `None` once the stream is exhausted.
    fn detect(&mut self) -> anyhow::Result<Option<Frame>>;
}

impl<D> Detector for Box<D>
where
    D: Detector + ?Sized,
{
    fn detect(&mut self) -> anyhow::Result<Option<Frame>> {
        (**self).detect()
    }
}
