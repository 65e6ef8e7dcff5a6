mod info;

pub use info::{ServiceInfo, VersionInfo, SERVICE_NAME};
