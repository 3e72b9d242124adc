// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/
use std::io;
use std::io::Write;

use groundspace::{interpret_until_result, std_tokenizer, Atom, GroundingSpace, EQUATION};

const MAX_STEPS: usize = 10_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let tokenizer = match std_tokenizer() {
        Ok(tokenizer) => tokenizer,
        Err(err) => {
            eprintln!("Failed to build tokenizer: {}", err);
            return;
        }
    };

    println!("Groundspace REPL v0.1.0");
    println!("Equations (= lhs rhs) go to the knowledge base; other atoms are interpreted.");
    println!("Type atoms to evaluate, or Ctrl-D to exit");
    println!();

    let mut kb = GroundingSpace::new();
    let mut infile: Box<dyn io::BufRead> = Box::new(io::stdin().lock());

    loop {
        print!("ground> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        let input_result = infile.read_line(&mut line);

        match input_result {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                println!("Error reading input: {}", e);
                break;
            }
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match tokenizer.parse(trimmed) {
                    Err(e) => {
                        println!("Parse error: {}", e);
                    }
                    Ok(atoms) => {
                        for atom in atoms {
                            if is_equation(&atom) {
                                println!("added: {}", atom);
                                kb.add(atom);
                            } else {
                                evaluate_and_print(atom, &kb);
                            }
                        }
                    }
                }
            }
        }
    }
}

fn is_equation(atom: &Atom) -> bool {
    match atom.as_expression() {
        Some([Atom::Symbol(head), ..]) => head == EQUATION,
        _ => false,
    }
}

fn evaluate_and_print(atom: Atom, kb: &GroundingSpace) {
    let mut target = GroundingSpace::from(vec![atom]);
    match interpret_until_result(&mut target, kb, MAX_STEPS) {
        Some(result) => println!("{}", result),
        None => {
            println!(
                "⚠ Evaluation stopped after {} steps (possible infinite loop)",
                MAX_STEPS
            );
            println!("Pending atoms:\n{}", target);
        }
    }
}
