//! `auric dump`: human-readable view of a table file.

use auric_lib::{AdvanceMode, EndingMode, Grammar, SymbolKind, load_grammar_file};

use crate::cli::DumpArgs;

pub fn run(args: &DumpArgs) -> i32 {
    let grammar = match load_grammar_file(&args.table) {
        Ok(grammar) => grammar,
        Err(err) => {
            eprintln!("error: {}: {err}", args.table.display());
            return 2;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&grammar) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: cannot serialize grammar: {err}");
                return 2;
            }
        }
        return 0;
    }

    print_summary(&grammar);
    0
}

fn print_summary(grammar: &Grammar) {
    for (key, value) in grammar.parameters() {
        println!("{key}: {value}");
    }
    println!(
        "tables: {} symbols, {} charsets, {} DFA states, {} LALR states",
        grammar.symbols().len(),
        grammar.charsets().len(),
        grammar.dfa_states().len(),
        grammar.lalr_states().len(),
    );
    println!();

    println!("symbols:");
    for (id, symbol) in grammar.symbols().iter().enumerate() {
        println!("  {id:3}  {:<12} {}", kind_label(symbol.kind), symbol.name);
    }
    println!();

    println!("rules:");
    for (id, rule) in grammar.rules().iter().enumerate() {
        let rhs = if rule.consumes.is_empty() {
            "<>".to_string()
        } else {
            rule.consumes
                .iter()
                .map(|&s| grammar.symbol(s).name.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("  {id:3}  <{}> ::= {rhs}", grammar.symbol(rule.produces).name);
    }

    if !grammar.groups().is_empty() {
        println!();
        println!("groups:");
        for group in grammar.groups() {
            let advance = match group.advance {
                AdvanceMode::Token => "token",
                AdvanceMode::Character => "char",
            };
            let ending = match group.ending {
                EndingMode::Open => "open",
                EndingMode::Closed => "closed",
            };
            println!(
                "  {} ({advance}, {ending}): {} .. {}",
                group.name,
                grammar.symbol(group.start).name,
                grammar.symbol(group.end).name,
            );
        }
    }
}

fn kind_label(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::NonTerminal => "nonterminal",
        SymbolKind::Terminal => "terminal",
        SymbolKind::Skippable => "skippable",
        SymbolKind::EndOfFile => "end-of-file",
        SymbolKind::GroupStart => "group-start",
        SymbolKind::GroupEnd => "group-end",
        SymbolKind::CommentLine => "comment-line",
        SymbolKind::Error => "error",
    }
}
