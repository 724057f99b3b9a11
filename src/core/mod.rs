pub mod annotation;
pub mod figure;
pub mod layout;
pub mod primitives;
pub mod types;

pub use annotation::{Annotation, ArrowStyle, AxisRef, MAX_ARROWHEAD};
pub use figure::Figure;
pub use layout::{Axis, Font, Layout, TickPlacement};
pub use types::{Trace, TraceKind, TraceMode};
