//! The three Catalyst Center operations exposed as model-callable tools.

use std::sync::Arc;

use crate::dnac::{AuthToken, DnacClient};

use super::tool::{AgentTool, Tool};
use super::types::AgentToolParameters;

/// Build the tool set over a shared Catalyst Center client.
///
/// The token is not cached anywhere: `get_auth_token` returns it to the
/// model, which threads it through the two query tools explicitly.
pub fn catalyst_tools(client: Arc<DnacClient>) -> Vec<Arc<dyn Tool>> {
    let auth_client = Arc::clone(&client);
    let get_auth_token = AgentTool::new(
        "get_auth_token",
        "Retrieve an authentication token from Catalyst Center using the configured \
         credentials. Call this first; the other tools require the token.",
        AgentToolParameters::empty(),
        move |_args| {
            let client = Arc::clone(&auth_client);
            async move {
                let token = client.authenticate().await?;
                Ok(serde_json::json!({ "token": token.as_str() }))
            }
        },
    );

    let inventory_client = Arc::clone(&client);
    let get_device_inventory = AgentTool::new(
        "get_device_inventory",
        "Retrieve the network device inventory from Catalyst Center. Returns the list \
         of device records and a 'complete' flag; when false, pagination failed partway \
         and the list is a prefix of the real inventory.",
        AgentToolParameters::object()
            .string("token", "Authentication token from get_auth_token", true)
            .build(),
        move |args| {
            let client = Arc::clone(&inventory_client);
            async move {
                let token = AuthToken(args.get_str("token")?.to_string());
                let inventory = client.device_inventory(&token).await?;
                Ok(serde_json::to_value(&inventory)?)
            }
        },
    );

    let config_client = Arc::clone(&client);
    let get_device_config = AgentTool::new(
        "get_device_config",
        "Retrieve the running configuration for a device id. Needs the token to \
         authenticate and the device id from the inventory.",
        AgentToolParameters::object()
            .string("token", "Authentication token from get_auth_token", true)
            .string("device_id", "Device to get configuration for", true)
            .build(),
        move |args| {
            let client = Arc::clone(&config_client);
            async move {
                let token = AuthToken(args.get_str("token")?.to_string());
                let device_id = args.get_str("device_id")?.to_string();
                let config = client.device_config(&token, &device_id).await?;
                Ok(serde_json::json!({ "config": config }))
            }
        },
    );

    vec![
        Arc::new(get_auth_token),
        Arc::new(get_device_inventory),
        Arc::new(get_device_config),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_set_exposes_the_three_operations() {
        let client =
            Arc::new(DnacClient::new("https://dnac.example.com", "u", "p", false).unwrap());
        let tools = catalyst_tools(client);
        let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec!["get_auth_token", "get_device_inventory", "get_device_config"]
        );
    }

    #[test]
    fn query_tools_require_token_parameter() {
        let client =
            Arc::new(DnacClient::new("https://dnac.example.com", "u", "p", false).unwrap());
        let tools = catalyst_tools(client);
        for tool in tools.iter().skip(1) {
            let required = &tool.parameters().schema["required"];
            assert!(
                required.as_array().unwrap().contains(&serde_json::json!("token")),
                "{} must require a token",
                tool.name()
            );
        }
    }
}
