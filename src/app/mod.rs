// Application layer: the interactive run wired on top of the pipeline.

pub mod session;
