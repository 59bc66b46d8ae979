//! projkit CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use projkit_cli::{Cli, Commands};
use projkit_core::compiler::DefaultVersionCmp;
use projkit_core::{SystemEnv, compiler_root, exec, ident, parse_context_entry};
use projkit_schema::{ComponentAttributes, FileCategory, PackAttributes};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::ComponentId {
            vendor,
            class,
            bundle,
            group,
            sub,
            variant,
            version,
            aggregate,
            partial,
        } => {
            let attrs = ComponentAttributes {
                vendor,
                class,
                bundle,
                group,
                sub,
                variant,
                version,
            };
            let id = if aggregate {
                ident::component_aggregate_id(&attrs)
            } else if partial {
                ident::partial_component_id(&attrs)
            } else {
                ident::component_id(&attrs)
            };
            println!("{id}");
        }
        Commands::Decompose { id } => {
            let attrs = ident::component_attributes_from_id(&id);
            println!("{}", serde_json::to_string_pretty(&attrs)?);
        }
        Commands::PackId {
            vendor,
            name,
            version,
        } => {
            println!("{}", ident::pack_id(&PackAttributes::new(vendor, name, version)));
        }
        Commands::Expand { specifier } => {
            let range = projkit_core::expand_compiler(&specifier);
            println!("{}", serde_json::to_string_pretty(&range)?);
        }
        Commands::Compatible { first, second } => {
            let compatible =
                projkit_core::compilers_compatible(&first, &second, &DefaultVersionCmp);
            println!("{compatible}");
        }
        Commands::Intersect { first, second } => {
            println!(
                "{}",
                projkit_core::compilers_intersect(&first, &second, &DefaultVersionCmp)
            );
        }
        Commands::Context { entry } => {
            let context = parse_context_entry(&entry);
            println!("{}", serde_json::to_string_pretty(&context)?);
        }
        Commands::Category { file } => {
            println!("{}", FileCategory::from_path(&file));
        }
        Commands::CompilerRoot => {
            println!("{}", compiler_root(&SystemEnv));
        }
        Commands::Run { cmd } => {
            let result = exec::exec_command(&cmd);
            print!("{}", result.stdout);
            std::process::exit(result.exit_code);
        }
    }
    Ok(())
}
