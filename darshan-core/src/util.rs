use std::time::Duration;

pub const NET_CONNECT_TIMEOUT: Duration = Duration::from_millis(8 * 1000);

pub const NET_IO_TIMEOUT: Duration = Duration::from_millis(16 * 1000);

pub fn default_ureq_agent_builder(
    proxy_url: Option<&str>,
) -> ureq::config::ConfigBuilder<ureq::typestate::AgentScope> {
    let mut agent = ureq::Agent::config_builder()
        .timeout_connect(Some(NET_CONNECT_TIMEOUT))
        .timeout_recv_response(Some(NET_IO_TIMEOUT))
        .timeout_send_request(Some(NET_IO_TIMEOUT));

    if let Some(proxy_url) = proxy_url {
        let proxy = ureq::Proxy::new(proxy_url).ok();
        agent = agent.proxy(proxy);
    }

    agent
}
