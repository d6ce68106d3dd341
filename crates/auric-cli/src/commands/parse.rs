//! `auric parse`: run an input through a compiled grammar.

use auric_lib::{
    Grammar, LalrStateId, ParseObserver, ParseOptions, ParseResult, Source, StackItem, Token,
    load_grammar_with_warnings, parse_with,
};

use crate::cli::ParseArgs;

/// Observer printing one line per engine event to stderr.
struct TraceObserver<'g> {
    grammar: &'g Grammar,
}

impl ParseObserver for TraceObserver<'_> {
    fn on_token(&mut self, token: &Token) {
        let name = &self.grammar.symbol(token.symbol).name;
        eprintln!("token  {name} {:?} @ {}", token.text, token.position);
    }

    fn on_shift(&mut self, pre_state: LalrStateId, look_ahead: &Token, stack: &[StackItem]) {
        let name = &self.grammar.symbol(look_ahead.symbol).name;
        eprintln!("shift  {name} ({pre_state} -> {})", stack.last().map_or(0, |i| i.state));
    }

    fn on_reduce(&mut self, pre_state: LalrStateId, _look_ahead: &Token, stack: &[StackItem]) {
        let produced = stack
            .last()
            .and_then(|item| item.node.as_ref())
            .map(|node| self.grammar.symbol(node.symbol()).name.as_str())
            .unwrap_or("?");
        eprintln!("reduce {produced} ({pre_state} -> {})", stack.last().map_or(0, |i| i.state));
    }
}

pub fn run(args: &ParseArgs) -> i32 {
    let (grammar, warnings) = match load_grammar_with_warnings(&match std::fs::read(&args.table) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", args.table.display());
            return 2;
        }
    }) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("error: {}: {err}", args.table.display());
            return 2;
        }
    };
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    let input = match (&args.input, &args.text) {
        (_, Some(text)) => text.clone(),
        (Some(path), None) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("error: cannot read {}: {err}", path.display());
                return 2;
            }
        },
        (None, None) => {
            eprintln!("error: provide an input file or --text");
            return 2;
        }
    };

    let result = if args.trace {
        let mut observer = TraceObserver { grammar: &grammar };
        parse_with(&input, &grammar, &mut observer, ParseOptions::default())
    } else {
        auric_lib::parse(&input, &grammar)
    };

    let source = Source::new(&input);
    match result {
        ParseResult::Accept(tree) => {
            if args.json {
                let rendered = if args.pretty {
                    serde_json::to_string_pretty(&tree)
                } else {
                    serde_json::to_string(&tree)
                };
                match rendered {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("error: cannot serialize tree: {err}");
                        return 2;
                    }
                }
            } else {
                print!("{}", tree.dump(&grammar));
            }
            0
        }
        ParseResult::Lex(err) => {
            let (line, col) = source.line_col(err.position);
            eprintln!("lex error: no token matches at line {line}, column {col}");
            1
        }
        ParseResult::Group(err) => {
            for frame in &err.open_frames {
                let (line, col) = source.line_col(frame.position);
                let name = &grammar.group(frame.group).name;
                eprintln!("group error: '{name}' opened at line {line}, column {col} is never closed");
            }
            1
        }
        ParseResult::Syntax(err) => {
            match &err.last_token {
                Some(token) => {
                    let (line, col) = source.line_col(token.position);
                    eprintln!(
                        "syntax error: unexpected '{}' at line {line}, column {col}",
                        token.text
                    );
                }
                None => eprintln!("syntax error: unexpected end of input"),
            }
            1
        }
        ParseResult::Cancelled => {
            eprintln!("error: parse cancelled");
            1
        }
    }
}
