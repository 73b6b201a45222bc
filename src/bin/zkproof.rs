//! zkproof CLI — create and check range proofs from the shell
//!
//! Commands:
//!   zkproof params  — print (or write) the active group parameters
//!   zkproof commit  — commit to a value and print the opening
//!   zkproof prove   — create a range proof as JSON
//!   zkproof verify  — verify a range proof JSON file
//!   zkproof credit  — credit-score proof
//!   zkproof funds   — proof of funds
//!   zkproof age     — age-threshold proof
//!   zkproof demo    — walk through the whole flow

use num_bigint::BigUint;
use serde::Serialize;
use std::env;
use std::process::ExitCode;
use zkproof_core::config::PARAMS_ENV_VAR;
use zkproof_core::{
    AgeThresholdProof, CreditScoreProof, FundsProof, ParametersConfig, Proof, ProofEngine,
    SalaryBracketProof,
};

fn print_usage() {
    println!(
        r#"
zkproof — zero-knowledge range proofs

Usage: zkproof <command> [options]

Commands:
  params  [out.json]                  Show active parameters, optionally save them
  commit  <value>                     Commit to a value (prints the secret opening!)
  prove   <value> <lower> <upper>     Create a range proof (JSON on stdout)
  verify  <proof.json> <lower> <upper>
                                      Verify a range proof
  credit  <score> <threshold>         Prove a credit score floor
  funds   <balance> <minimum>         Prove a minimum balance
  age     <birth_unix_ts> <min_age>   Prove an age threshold
  demo                                Run the full flow end to end

Parameters are read from the JSON file named by ${}; the standard
256-bit group is used when it is unset.

Examples:
  zkproof prove 75000 50000 100000 > proof.json
  zkproof verify proof.json 50000 100000
  zkproof credit 750 700
"#,
        PARAMS_ENV_VAR
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let engine = match load_engine() {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Cannot load group parameters: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match args[1].as_str() {
        "params" => cmd_params(&engine, &args[2..]),
        "commit" => cmd_commit(&engine, &args[2..]),
        "prove" => cmd_prove(&engine, &args[2..]),
        "verify" => cmd_verify(&engine, &args[2..]),
        "credit" => cmd_credit(&engine, &args[2..]),
        "funds" => cmd_funds(&engine, &args[2..]),
        "age" => cmd_age(&engine, &args[2..]),
        "demo" => cmd_demo(&engine),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Err("unknown command".to_string())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("  Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

type CmdResult = Result<(), String>;

fn load_engine() -> Result<ProofEngine, zkproof_core::ConfigError> {
    let params = ParametersConfig::from_env()?.to_parameters()?;
    Ok(ProofEngine::new(params))
}

fn parse_big(arg: &str, what: &str) -> Result<BigUint, String> {
    arg.parse()
        .map_err(|_| format!("{} must be a non-negative integer, got '{}'", what, arg))
}

fn parse_u64(arg: &str, what: &str) -> Result<u64, String> {
    arg.parse()
        .map_err(|_| format!("{} must be a non-negative integer, got '{}'", what, arg))
}

fn print_json<T: Serialize>(value: &T) -> CmdResult {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn cmd_params(engine: &ProofEngine, args: &[String]) -> CmdResult {
    let config = ParametersConfig::from_parameters(engine.params());
    if let Some(path) = args.first() {
        config.save(path).map_err(|e| e.to_string())?;
    }
    print_json(&config)
}

fn cmd_commit(engine: &ProofEngine, args: &[String]) -> CmdResult {
    let [value] = args else {
        return Err("usage: zkproof commit <value>".to_string());
    };
    let value = parse_big(value, "value")?;
    let committed = engine.create_commitment(&value).map_err(|e| e.to_string())?;
    log::warn!("The randomness below opens the commitment; keep it private");
    println!("commitment: {}", committed.commitment);
    println!("randomness: {}", committed.witness.randomness);
    Ok(())
}

fn cmd_prove(engine: &ProofEngine, args: &[String]) -> CmdResult {
    let [value, lower, upper] = args else {
        return Err("usage: zkproof prove <value> <lower> <upper>".to_string());
    };
    let value = parse_big(value, "value")?;
    let lower = parse_big(lower, "lower")?;
    let upper = parse_big(upper, "upper")?;
    let proof = engine
        .create_range_proof(&value, &lower, &upper)
        .map_err(|e| e.to_string())?;
    log::info!("Created range proof for [{}, {}]", lower, upper);
    print_json(&proof)
}

fn cmd_verify(engine: &ProofEngine, args: &[String]) -> CmdResult {
    let [path, lower, upper] = args else {
        return Err("usage: zkproof verify <proof.json> <lower> <upper>".to_string());
    };
    let json = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    let proof: Proof = serde_json::from_str(&json).map_err(|e| format!("{}: {}", path, e))?;
    let lower = parse_big(lower, "lower")?;
    let upper = parse_big(upper, "upper")?;

    if engine.verify_range_proof(&proof, &lower, &upper) {
        println!("  VALID: value proven in [{}, {}]", lower, upper);
        Ok(())
    } else {
        Err("proof rejected".to_string())
    }
}

fn cmd_credit(engine: &ProofEngine, args: &[String]) -> CmdResult {
    let [score, threshold] = args else {
        return Err("usage: zkproof credit <score> <threshold>".to_string());
    };
    let package = CreditScoreProof::create(
        engine,
        parse_u64(score, "score")?,
        parse_u64(threshold, "threshold")?,
    )
    .map_err(|e| e.to_string())?;
    print_json(&package)
}

fn cmd_funds(engine: &ProofEngine, args: &[String]) -> CmdResult {
    let [balance, minimum] = args else {
        return Err("usage: zkproof funds <balance> <minimum>".to_string());
    };
    let package = FundsProof::create(
        engine,
        parse_u64(balance, "balance")?,
        parse_u64(minimum, "minimum")?,
    )
    .map_err(|e| e.to_string())?;
    print_json(&package)
}

fn cmd_age(engine: &ProofEngine, args: &[String]) -> CmdResult {
    let [birth, min_age] = args else {
        return Err("usage: zkproof age <birth_unix_ts> <min_age>".to_string());
    };
    let package = AgeThresholdProof::create(
        engine,
        parse_u64(birth, "birth timestamp")?,
        parse_u64(min_age, "minimum age")?,
    )
    .map_err(|e| e.to_string())?;
    print_json(&package)
}

fn cmd_demo(engine: &ProofEngine) -> CmdResult {
    println!("\n=== 1. Salary bracket ===");
    let salary = SalaryBracketProof::create(engine, 75_000, 50_000, 100_000)
        .map_err(|e| e.to_string())?;
    println!("  Claim: {}", salary.claim);
    println!("  Verified: {}", salary.verify(engine));
    println!("  Proving 40000 in the same bracket:");
    match SalaryBracketProof::create(engine, 40_000, 50_000, 100_000) {
        Ok(_) => println!("    unexpectedly succeeded"),
        Err(e) => println!("    refused: {}", e),
    }

    println!("\n=== 2. Credit score ===");
    for score in [650u64, 750] {
        match CreditScoreProof::create(engine, score, 700) {
            Ok(p) => println!("  score {}: {} (verified: {})", score, p.claim, p.verify(engine)),
            Err(e) => println!("  score {}: refused: {}", score, e),
        }
    }

    println!("\n=== 3. Proof of funds ===");
    let funds = FundsProof::create(engine, 25_000, 10_000).map_err(|e| e.to_string())?;
    println!("  Claim: {}", funds.claim);
    println!("  Satisfies 10000: {}", funds.satisfies(engine, 10_000));
    println!("  Satisfies 20000: {}", funds.satisfies(engine, 20_000));

    println!("\n=== 4. Tampering ===");
    let mut tampered = salary.proof.clone();
    tampered.response += 1u32;
    println!(
        "  Modified response verifies: {}",
        engine.verify_range_proof(&tampered, &BigUint::from(50_000u32), &BigUint::from(100_000u32))
    );
    println!(
        "  Wrong upper bound verifies: {}",
        engine.verify_range_proof(&salary.proof, &BigUint::from(50_000u32), &BigUint::from(90_000u32))
    );

    println!("\nDemo complete.");
    Ok(())
}
