//! Prints environment variables coerced to the requested types.
//!
//! ```text
//! PORT=8080 print-env PORT:int DEBUG:bool=false
//! print-env --prefix APP_ --required DATABASE_URL
//! print-env --json
//! ```

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::Parser;
use mxp_env::{EnvSource, EnvVar, Resolver, ResolverOptions, SystemEnv};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "print-env", about = "Resolve and coerce environment variables")]
struct Args {
    /// Prefix prepended to every variable name.
    #[arg(long)]
    prefix: Option<String>,

    /// Treat empty values as unset.
    #[arg(long)]
    empty_is_unset: bool,

    /// Fail when any listed variable is unset.
    #[arg(long)]
    required: bool,

    /// Dump the whole environment as a JSON object and exit.
    #[arg(long)]
    json: bool,

    /// Variables as `NAME[:type][=fallback]`; type is one of
    /// string, int, float, bool, json, list.
    specs: Vec<VarSpec>,
}

#[derive(Clone, Copy, Debug)]
enum Kind {
    String,
    Int,
    Float,
    Bool,
    Json,
    List,
}

#[derive(Clone, Debug)]
struct VarSpec {
    name: String,
    kind: Kind,
    fallback: Option<String>,
}

impl FromStr for VarSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (head, fallback) = match s.split_once('=') {
            Some((head, fallback)) => (head, Some(fallback.to_owned())),
            None => (s, None),
        };
        let (name, kind) = match head.split_once(':') {
            Some((name, kind)) => (name, kind),
            None => (head, "string"),
        };
        if name.is_empty() {
            bail!("variable name cannot be empty in `{s}`");
        }
        let kind = match kind {
            "string" => Kind::String,
            "int" => Kind::Int,
            "float" => Kind::Float,
            "bool" => Kind::Bool,
            "json" => Kind::Json,
            "list" => Kind::List,
            other => bail!("unknown type `{other}`"),
        };
        Ok(Self {
            name: name.to_owned(),
            kind,
            fallback,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut options = ResolverOptions::new().empty_is_unset(args.empty_is_unset);
    if let Some(prefix) = &args.prefix {
        options = options.with_prefix(prefix.as_str());
    }
    let resolver = Resolver::with_options(&SystemEnv, options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolver.all_vars())?);
        return Ok(());
    }

    for spec in &args.specs {
        let (name, value) = resolve(&resolver, spec, args.required)?;
        info!(variable = %name, "resolved");
        println!("{name}={value}");
    }

    Ok(())
}

/// Resolves one spec, returning the looked-up name and its coerced value.
fn resolve<S: EnvSource + ?Sized>(
    resolver: &Resolver<'_, S>,
    spec: &VarSpec,
    required: bool,
) -> Result<(String, Value)> {
    let var = match &spec.fallback {
        Some(fallback) => resolver.var_or(&spec.name, fallback.as_str()),
        None => resolver.var(&spec.name),
    };
    let name = var.name().to_owned();
    let var = if required {
        var.required().map(EnvVar::from)
    } else {
        Ok(var)
    };
    let value = var
        .and_then(|var| coerce(var, spec.kind))
        .with_context(|| format!("resolving `{name}`"))?;
    Ok((name, value))
}

fn coerce(var: EnvVar, kind: Kind) -> mxp_env::Result<Value> {
    let value = match kind {
        Kind::String => var.as_string().map(Value::from),
        Kind::Int => var.as_int()?.map(Value::from),
        Kind::Float => var.as_float()?.map(Value::from),
        Kind::Bool => var.as_bool()?.map(Value::from),
        Kind::Json => var.as_json()?,
        Kind::List => var.as_list().map(Value::from),
    };
    Ok(value.unwrap_or(Value::Null))
}
