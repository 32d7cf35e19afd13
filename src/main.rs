//! heka CLI: demo scenarios for the symbolic-reasoning engine.
//!
//! Each subcommand builds a scenario network through the public library
//! surface, runs the forcing protocol, and prints a report.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use heka::core::{Concept, Predicate, SemanticNetwork, Value};
use heka::forcing::{BruteEnumStrategy, Conditions, ForcingEngine};
use heka::logic::{Formula, Term};
use heka::param::{Context, EnumDomain, Variable};
use heka::snapshot::NetworkSnapshot;

#[derive(Parser)]
#[command(name = "heka", version, about = "Symbolic reasoning engine")]
struct Cli {
    /// Optional TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter (overrides the config file), e.g. "debug" or "heka=trace".
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Two people and one `knows` fact: the smallest forcing run.
    Hello {
        /// Print the network snapshot as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },

    /// The fishing graph: derive arrow compositions, then force the
    /// canonical composition equalities.
    Fishing {
        /// Print the network snapshot as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RunConfig {
    forcing: ForcingSection,
    log: LogSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ForcingSection {
    max_branch: usize,
}

impl Default for ForcingSection {
    fn default() -> Self {
        Self { max_branch: 2000 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct LogSection {
    filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "info".into(),
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<RunConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).into_diagnostic()?;
            toml::from_str(&raw).into_diagnostic()
        }
        None => Ok(RunConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let filter = cli
        .log_filter
        .clone()
        .unwrap_or_else(|| config.log.filter.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).into_diagnostic()?)
        .init();

    match cli.command {
        Commands::Hello { json } => run_hello(&config, json),
        Commands::Fishing { json } => run_fishing(&config, json),
    }
}

// ---------------------------------------------------------------------------
// Hello scenario
// ---------------------------------------------------------------------------

fn run_hello(config: &RunConfig, json: bool) -> Result<()> {
    let mut net = SemanticNetwork::new();
    net.add_concept(Concept::labeled("alice", "Alice"))?;
    net.add_concept(Concept::labeled("bob", "Bob"))?;
    net.add_predicate(Predicate::new("knows", 2)?.with_roles(["who", "whom"])?)?;

    let alice: Value = net.concept("alice").unwrap().into();
    let bob: Value = net.concept("bob").unwrap().into();
    net.assert_fact("knows", vec![alice.clone(), bob.clone()])?;

    if json {
        return print_snapshot(&net);
    }

    let people = Arc::new(EnumDomain::new([alice, bob]));
    let x = Variable::new("x", people.clone())?;
    let y = Variable::new("y", people)?;
    let mut ctx = Context::new();
    ctx.set(&x, Value::from(net.concept("alice").unwrap()))?;
    ctx.set(&y, Value::from(net.concept("bob").unwrap()))?;

    let phi = Formula::fact("knows", [Term::from(&x), Term::from(&y)]);
    report(config, &net, &ctx, &phi, &Conditions::new())
}

// ---------------------------------------------------------------------------
// Fishing scenario
// ---------------------------------------------------------------------------

/// Build the canonical fishing graph: event states, fish/worm partitions,
/// and the named arrows between them. Compositions are derived, not asserted.
fn build_fishing_network() -> Result<SemanticNetwork> {
    let mut net = SemanticNetwork::new();

    let concepts = [
        ("A", "A (event state)"),
        ("B", "B (event state)"),
        ("F", "Fish (F)"),
        ("F_plus", "F+ (caught fish)"),
        ("F_minus", "F- (free fish)"),
        ("W", "Worm (W)"),
        ("W_plus", "W+ (fake worm/bait)"),
        ("Cf_minus", "C_f-"),
        ("Cf_plus", "C_f+"),
    ];
    for (id, label) in concepts {
        net.add_concept(Concept::labeled(id, label))?;
    }

    net.add_predicate(Predicate::new("edge", 3)?.with_roles(["label", "from", "to"])?)?;
    net.add_predicate(Predicate::new("subset", 2)?.with_roles(["sub", "sup"])?)?;
    net.add_predicate(Predicate::new("diff", 3)?.with_roles(["result", "set", "minus"])?)?;
    net.add_predicate(Predicate::new("derived_edge", 3)?.with_roles(["label", "from", "to"])?)?;
    net.add_predicate(Predicate::new("comp2", 3)?.with_roles(["left", "right", "result"])?)?;
    net.add_predicate(Predicate::new("compN", 2)?.with_roles(["chain", "result"])?)?;

    let edges = [
        ("f", "B", "A"),
        ("h", "A", "F"),
        ("s", "A", "F_minus"),
        ("j", "A", "F_plus"),
        ("g_minus", "F", "F_minus"),
        ("g_plus", "F", "F_plus"),
        ("catch", "F_minus", "F_plus"),
        ("sf", "B", "Cf_minus"),
        ("incl", "Cf_minus", "F_minus"),
        ("incl", "Cf_plus", "F_plus"),
        ("eat", "Cf_minus", "W"),
        ("fake_plus", "W", "W_plus"),
        ("fake_minus", "W", "W"),
        ("hook_minus", "W", "Cf_minus"),
        ("hook_plus", "W_plus", "Cf_plus"),
        ("catch_sf", "B", "Cf_plus"),
    ];
    for (label, from, to) in edges {
        let from: Value = net.concept(from).unwrap().into();
        let to: Value = net.concept(to).unwrap().into();
        net.assert_fact("edge", vec![label.into(), from, to])?;
    }

    let f: Value = net.concept("F").unwrap().into();
    let fp: Value = net.concept("F_plus").unwrap().into();
    let fm: Value = net.concept("F_minus").unwrap().into();
    net.assert_fact("subset", vec![fp.clone(), f.clone()])?;
    net.assert_fact("subset", vec![fm.clone(), f.clone()])?;
    net.assert_fact("diff", vec![fm, f, fp])?;

    net.validate()?;
    Ok(net)
}

/// Every edge as (label, from-id, to-id), including derived arrows.
fn fishing_edges(net: &SemanticNetwork) -> Vec<(String, String, String)> {
    let mut out = Vec::new();
    for predicate in ["edge", "derived_edge"] {
        for st in net.facts_for(predicate) {
            if let (Value::Str(label), Some(from), Some(to)) =
                (&st.args[0], st.args[1].as_concept(), st.args[2].as_concept())
            {
                out.push((label.clone(), from.id.clone(), to.id.clone()));
            }
        }
    }
    out
}

/// Two-step composition equality: if `X -left-> mid`, `mid -right-> Z`, and
/// some named arrow `X -result-> Z` exists, assert `comp2(left, right, result)`.
fn derive_comp2(net: &mut SemanticNetwork) -> Result<usize> {
    let edges = fishing_edges(net);

    let mut by_pair: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();
    for (label, from, to) in &edges {
        by_pair
            .entry((from.clone(), to.clone()))
            .or_default()
            .push(label.clone());
    }

    let before = net.facts_for("comp2").len();
    for (left, x, mid) in &edges {
        for (right, mid2, z) in &edges {
            if mid2 != mid {
                continue;
            }
            for result in by_pair.get(&(x.clone(), z.clone())).into_iter().flatten() {
                net.assert_fact(
                    "comp2",
                    vec![left.as_str().into(), right.as_str().into(), result.as_str().into()],
                )?;
            }
        }
    }
    Ok(net.facts_for("comp2").len() - before)
}

/// N-step composition: follow `chain` label by label from `start`; if some
/// reached end also has a direct `result_label` arrow from `start`, record
/// `compN(chain_name, result_label)` and materialize the composed arrow.
fn derive_comp_n(
    net: &mut SemanticNetwork,
    start: &str,
    chain: &[&str],
    result_label: &str,
    chain_name: &str,
) -> Result<bool> {
    let edges = fishing_edges(net);

    let mut current: Vec<String> = vec![start.to_owned()];
    for step in chain {
        let mut next: Vec<String> = Vec::new();
        for (label, from, to) in &edges {
            if label == step && current.contains(from) && !next.contains(to) {
                next.push(to.clone());
            }
        }
        if next.is_empty() {
            return Ok(false);
        }
        current = next;
    }

    for end in &current {
        let direct = edges
            .iter()
            .any(|(label, from, to)| label == result_label && from == start && to == end);
        if !direct {
            continue;
        }
        net.assert_fact(
            "compN",
            vec![chain_name.into(), result_label.into()],
        )?;
        if current.len() == 1 {
            let from: Value = net.concept(start).unwrap().into();
            let to: Value = net.concept(end).unwrap().into();
            net.assert_fact("derived_edge", vec![chain_name.into(), from, to])?;
        }
        return Ok(true);
    }
    Ok(false)
}

fn run_fishing(config: &RunConfig, json: bool) -> Result<()> {
    let mut net = build_fishing_network()?;

    let comp2_added = derive_comp2(&mut net)?;
    let long_chain = "hook+∘fake+∘eat∘sf";
    let long_ok = derive_comp_n(
        &mut net,
        "B",
        &["sf", "eat", "fake_plus", "hook_plus"],
        "catch_sf",
        long_chain,
    )?;
    println!("derived: comp2 +{comp2_added}, long chain ok: {long_ok}");

    if json {
        return print_snapshot(&net);
    }

    let equalities = [
        Formula::fact("comp2", ["h", "g_minus", "s"]),
        Formula::fact("comp2", ["h", "g_plus", "j"]),
        Formula::fact("comp2", ["s", "catch", "j"]),
        Formula::fact("compN", [long_chain, "catch_sf"]),
    ];
    let conditions = Conditions::new().add_all(equalities.clone());
    let goal = Formula::and(equalities);

    report(config, &net, &Context::new(), &goal, &conditions)
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

fn report(
    config: &RunConfig,
    net: &SemanticNetwork,
    ctx: &Context,
    phi: &Formula,
    conditions: &Conditions,
) -> Result<()> {
    let engine = ForcingEngine::new(net);
    let strategy = BruteEnumStrategy::new(config.forcing.max_branch);

    let chk = engine.check(ctx, conditions);
    println!(
        "check: ok={} violated={:?} unknown={:?}",
        chk.ok, chk.violated, chk.unknown
    );
    println!("forces: {}", engine.forces(ctx, phi, conditions));

    let result = engine.force_with(ctx, phi, conditions, &strategy)?;
    println!("force: {} ({})", result.status, result.explanation);
    if let Some(witness) = result.context {
        println!("context: {witness}");
    }
    Ok(())
}

fn print_snapshot(net: &SemanticNetwork) -> Result<()> {
    let snapshot = NetworkSnapshot::capture(net);
    println!("{}", snapshot.to_json()?);
    Ok(())
}
