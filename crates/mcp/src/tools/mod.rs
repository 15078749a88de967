pub mod echo;
pub mod system;
mod registry;

pub use echo::EchoTool;
pub use system::SystemInfoTool;
pub use registry::{json_schema_object, json_schema_string, Tool, ToolRegistry};
