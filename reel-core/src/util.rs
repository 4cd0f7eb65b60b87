use std::time::Duration;

use serde::{Deserialize, Deserializer};

pub const NET_CONNECT_TIMEOUT: Duration = Duration::from_millis(8 * 1000);

pub const NET_IO_TIMEOUT: Duration = Duration::from_millis(16 * 1000);

pub fn default_ureq_agent_builder(
    proxy_url: Option<&str>,
) -> ureq::config::ConfigBuilder<ureq::typestate::AgentScope> {
    let mut agent = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(20)))
        .timeout_connect(Some(NET_CONNECT_TIMEOUT))
        .timeout_recv_response(Some(NET_IO_TIMEOUT))
        .timeout_send_request(Some(NET_IO_TIMEOUT));

    if let Some(proxy_url) = proxy_url {
        match ureq::Proxy::new(proxy_url) {
            Ok(proxy) => agent = agent.proxy(Some(proxy)),
            Err(err) => log::error!("ignoring invalid proxy {proxy_url:?}: {err}"),
        }
    }

    agent
}

/// Joins `base` and a relative `path`, tolerating slashes on either side.
pub fn join_path(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Treats an explicit `null` like a missing field.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_path_normalizes_slashes() {
        assert_eq!(join_path("https://a/b/", "/c.jpg"), "https://a/b/c.jpg");
        assert_eq!(join_path("https://a/b", "c.jpg"), "https://a/b/c.jpg");
    }
}
