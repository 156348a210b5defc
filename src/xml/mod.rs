//! СИоЗП document construction and serialization.

mod emitter;
mod node;
mod writer;

pub use emitter::{AF5_NS, SIZP_NS, SystemInfo, UT2_NS, build_document};
pub use node::XmlElement;
pub use writer::{to_xml_string, write_document, write_to_file};
