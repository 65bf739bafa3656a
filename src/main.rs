use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

use nysiis::Nysiis;
use serde_json::json;

const USAGE: &str = "
Usage:
    nysiis encode <name>...
    nysiis encode -
    nysiis encode --max-length <n> <name>...

Encodes each name with the NYSIIS phonetic algorithm and prints one JSON
object per name with the name and its key. If '-' is the only name, reads
newline-separated names from stdin instead.

--max-length truncates keys to <n> characters; zero or a negative value
(the default) means unlimited.
";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "encode" {
        encode_mode(&args[2..]);
    } else {
        writeln!(&mut io::stderr(), "{}", USAGE).ok().unwrap();
        process::exit(64);
    }
}

fn encode_mode(args: &[String]) {
    let (encoder, names) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            writeln!(&mut io::stderr(), "{}\n{}", message, USAGE).ok().unwrap();
            process::exit(64);
        }
    };

    if names.len() == 1 && names[0] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let name = line.ok().unwrap();
            print_encoded(&encoder, &name);
        }
    } else {
        for name in names {
            print_encoded(&encoder, name);
        }
    }
}

fn parse_args(args: &[String]) -> Result<(Nysiis, &[String]), String> {
    if args[0] == "--max-length" {
        if args.len() < 3 {
            return Err("--max-length needs a value and at least one name".to_string());
        }
        let encoder = args[1]
            .parse::<Nysiis>()
            .map_err(|err| err.to_string())?;
        Ok((encoder, &args[2..]))
    } else {
        Ok((Nysiis::default(), args))
    }
}

fn print_encoded(encoder: &Nysiis, name: &str) {
    let output = json!({
        "name": name,
        "key": encoder.encode(name),
    });
    println!("{}", output);
}
