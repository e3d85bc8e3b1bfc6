use std::sync::Arc;
use toolcall_tool::builtin::create_echo_tool;
use toolcall_tool::{Error, FunctionTool, MethodSpec, ParamSpec, Tool, Toolset};

fn search_tool(description: &str) -> Arc<dyn Tool> {
    Arc::new(
        FunctionTool::builder()
            .name("Search")
            .description(description)
            .method(MethodSpec::new("execute").param(ParamSpec::required("query")))
            .execute(|input| Ok(format!("results for {input}")))
            .build()
            .unwrap(),
    )
}

#[test]
fn test_duplicate_tool_names_are_rejected() {
    let err = Toolset::new(vec![
        search_tool("Searches the web"),
        search_tool("A second search tool with the same name"),
    ])
    .unwrap_err();

    assert!(matches!(err, Error::DuplicateTool(ref name) if name == "Search"));
    assert!(err.to_string().contains("Search"));
}

#[test]
fn test_distinct_tool_names_validate() {
    let toolset = Toolset::new(vec![
        search_tool("Searches the web"),
        Arc::new(create_echo_tool().unwrap()),
    ])
    .unwrap();

    assert_eq!(toolset.len(), 2);
    assert!(toolset.get("Echo").is_some());
}

#[test]
fn test_toolset_flattens_schemas_in_order() {
    let toolset = Toolset::new(vec![
        search_tool("Searches the web"),
        Arc::new(create_echo_tool().unwrap()),
    ])
    .unwrap();

    let schemas = toolset.to_openai_tools();
    let names: Vec<&str> = schemas.iter().map(|s| s.function.name.as_str()).collect();
    assert_eq!(names, vec!["Search-execute", "Echo-execute"]);
}

#[test]
fn test_execute_through_validated_set() {
    let toolset = Toolset::new(vec![Arc::new(create_echo_tool().unwrap())]).unwrap();

    let echo = toolset.get("Echo").unwrap();
    assert_eq!(echo.execute("ping").unwrap(), "ping");
}
