// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use demos::{render_tree, RenderOptions};

/// Reads a JSON file and prints its tree.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File to read. Asked for interactively when omitted.
    path: Option<PathBuf>,
    /// Markers per nesting level.
    #[arg(long, default_value_t = 2)]
    indent: usize,
    /// Character used to draw nesting.
    #[arg(long, default_value_t = '-')]
    marker: char,
}

fn prompt_for_path() -> io::Result<PathBuf> {
    println!("The demo app. Read JSON file and prints result");
    print!("Enter filename: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let path = match args.path {
        Some(path) => path,
        None => match prompt_for_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Error: Unable to read filename: {}", e);
                std::process::exit(1);
            }
        },
    };

    let tree = match jsontree::parse_file(&path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error: '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    };
    log::debug!("{} has a {} root with {} entries", path.display(), tree.kind(), tree.len());

    let options = RenderOptions {
        indent: args.indent,
        marker: args.marker,
    };
    print!("{}", render_tree(&tree, &options));
}
