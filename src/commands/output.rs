use crate::error::Result;
use crate::models::{Build, BuildDefinitionReference};

/// Print a build record, either as pretty JSON or a short summary.
pub fn print_build(build: &Build, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(build)?);
        return Ok(());
    }

    println!("Build {}", build.id);
    if let Some(number) = &build.build_number {
        println!("  Number:  {}", number);
    }
    if let Some(definition) = &build.definition {
        println!("  Definition: {} ({})", definition.name, definition.id);
    }
    if let Some(branch) = &build.source_branch {
        println!("  Branch:  {}", branch);
    }
    if let Some(status) = &build.status {
        println!("  Status:  {}", status);
    }
    if let Some(result) = &build.result {
        println!("  Result:  {}", result);
    }
    if let Some(queued) = &build.queue_time {
        println!("  Queued:  {}", queued);
    }
    Ok(())
}

/// Print a definition record.
pub fn print_definition(definition: &BuildDefinitionReference, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(definition)?);
        return Ok(());
    }

    println!("Definition {}", definition.id);
    println!("  Name:    {}", definition.name);
    if let Some(project) = &definition.project {
        println!("  Project: {}", project.name);
    }
    if let Some(status) = &definition.queue_status {
        println!("  Queue:   {}", status);
    }
    if let Some(revision) = definition.revision {
        println!("  Revision: {}", revision);
    }
    Ok(())
}

/// Print a definition listing as an aligned table.
pub fn print_definition_list(definitions: &[BuildDefinitionReference], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(definitions)?);
        return Ok(());
    }

    if definitions.is_empty() {
        println!("No build definitions found.");
        return Ok(());
    }

    println!("{:<8} {}", "ID", "NAME");
    for definition in definitions {
        println!("{:<8} {}", definition.id, definition.name);
    }
    Ok(())
}
