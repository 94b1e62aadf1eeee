/// The version string that is reported by the server.
pub struct Version(pub &'static str);
