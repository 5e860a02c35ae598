use clap::Parser;

/// Risk backend server
#[derive(Debug, Clone, Parser)]
#[command(name = "risk", version, about)]
pub struct Config {
    /// Port on which to run the Risk backend
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
