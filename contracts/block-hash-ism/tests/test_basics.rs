use serde_json::json;

#[tokio::test]
async fn test_contract_is_operational() -> Result<(), Box<dyn std::error::Error>> {
    let contract_wasm = near_workspaces::compile_project("./").await?;
    let sandbox = near_workspaces::sandbox().await?;
    let contract = sandbox.dev_deploy(&contract_wasm).await?;

    let oracle = sandbox.dev_create_account().await?;

    // Initialize the module
    let outcome = contract
        .call("new")
        .args_json(json!({
            "oracle": oracle.id()
        }))
        .transact()
        .await?;
    assert!(
        outcome.is_success(),
        "Init failed: {:#?}",
        outcome.into_result().unwrap_err()
    );

    // Verify oracle address
    let stored_oracle: String = contract
        .view("get_oracle")
        .args_json(json!({}))
        .await?
        .json()?;
    assert_eq!(stored_oracle, oracle.id().to_string());

    // Null module type
    let module_type: u8 = contract
        .view("module_type")
        .args_json(json!({}))
        .await?
        .json()?;
    assert_eq!(module_type, 6);

    // A 63-byte body is rejected before the oracle is queried
    let mut message = vec![0u8; 77];
    message.extend_from_slice(&[0u8; 63]);
    let outcome = contract
        .call("verify")
        .args_json(json!({
            "metadata": [],
            "message": message
        }))
        .max_gas()
        .transact()
        .await?;
    assert!(outcome.is_failure());
    assert!(format!("{:?}", outcome.into_result().unwrap_err()).contains("Invalid message body"));

    Ok(())
}
