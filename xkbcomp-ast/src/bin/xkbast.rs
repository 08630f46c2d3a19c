use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use xkbcomp_ast::{
    append_keysym_list, create_keysym_list, create_multi_keysym_list, free_expr, free_stmt, free_xkb_file,
    include_create, include_stmt, Chain, Diagnostics, FileDefs, FileFactory, Node, ParseOptions, XkbFile,
};
use xkbcomp_core::{lookup_keysym, BasicKeysymResolver, FileType, MergeMode, LC_DEFAULT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build and inspect XKB syntax tree fragments", long_about = None)]
struct Args {
    /// Warning level; 0 disables warnings
    #[arg(short, long, default_value_t = xkbcomp_ast::options::DEFAULT_WARNING_LEVEL)]
    warning_level: u8,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split an include directive such as "pc+us(intl):2|compose(ralt)"
    Include {
        directive: String,

        /// Merge mode of the first reference (default, augment, override, replace, alternate)
        #[arg(short, long, default_value = "default")]
        merge: String,
    },

    /// Build a keysym list, one level per name
    Keysyms {
        #[arg(required = true)]
        names: Vec<String>,

        /// Treat all names as alternates of a single level
        #[arg(long)]
        multi: bool,
    },

    /// Check the default sections of a symbols file; prefix a name with '*' to mark it default
    Defaults {
        file: String,

        #[arg(required = true)]
        sections: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let options = ParseOptions::new().with_warning_level(args.warning_level);
    info!("warning level {}", options.warning_level);

    match args.command {
        Command::Include { directive, merge } => show_include(&directive, &merge),
        Command::Keysyms { names, multi } => show_keysyms(&names, multi),
        Command::Defaults { file, sections } => show_defaults(&file, &sections, options),
    }
}

fn show_include(directive: &str, merge: &str) -> Result<()> {
    let Some(merge) = MergeMode::from_keyword(merge) else {
        bail!("unknown merge mode '{}'", merge);
    };

    let chain = include_create(directive, merge).with_context(|| format!("while splitting \"{}\"", directive))?;
    if chain.is_empty() {
        println!("(empty directive)");
        return Ok(());
    }

    for (i, incl) in chain.iter().enumerate() {
        let target = if incl.is_self() {
            "%".to_string()
        } else {
            format!(
                "{}({})",
                incl.file.as_deref().unwrap_or(""),
                incl.map.as_deref().unwrap_or("")
            )
        };
        match &incl.modifier {
            Some(modifier) => println!("{}: {} {}:{}", i, incl.merge, target, modifier),
            None => println!("{}: {} {}", i, incl.merge, target),
        }
    }

    let freed = include_stmt(chain).map(|stmt| free_stmt(Chain::from(stmt))).unwrap_or(0);
    println!("released {} node(s)", freed);
    Ok(())
}

fn show_keysyms(names: &[String], multi: bool) -> Result<()> {
    let Some((first, rest)) = names.split_first() else {
        bail!("no keysym names given");
    };

    let mut list = create_keysym_list(first.as_str())?;
    for name in rest {
        list = append_keysym_list(list, name.as_str())?;
    }
    if multi {
        list = create_multi_keysym_list(list)?;
    }

    let resolver = BasicKeysymResolver::new();
    if let Some(syms) = list.def.keysym_list() {
        println!(
            "{} symbol(s) in {} level(s), capacity {}x{}",
            syms.n_syms(),
            syms.n_levels(),
            syms.sz_syms(),
            syms.sz_levels()
        );
        for (level, entries) in syms.levels().iter().enumerate() {
            let resolved: Vec<String> = entries
                .iter()
                .map(|name| match lookup_keysym(Some(*name), &resolver) {
                    Some(sym) => format!("{}=0x{:x}", name, sym),
                    None => format!("{}=?", name),
                })
                .collect();
            println!("level {}: [{}]", level + 1, resolved.join(", "));
        }
    }

    let freed = free_expr(Chain::from(list));
    println!("released {} node(s)", freed);
    Ok(())
}

/// Builds a keymap holding one empty symbols section per name and keeps the
/// default flag on the first `*`-prefixed section only.
fn check_defaults(file: &str, sections: &[String], options: ParseOptions) -> Result<(Box<Node<XkbFile>>, Diagnostics)> {
    let mut factory = FileFactory::new(options);
    let mut maps = Chain::new();
    for section in sections {
        let (name, flags) = match section.strip_prefix('*') {
            Some(name) => (name, LC_DEFAULT),
            None => (section.as_str(), 0),
        };
        let map = factory.create_xkb_file(FileType::Symbols, Some(name.to_string()), FileDefs::Stmts(Chain::new()), flags)?;
        maps = maps.append(Chain::from(map));
    }

    let mut diagnostics = Diagnostics::new();
    let demoted = factory.check_default_map(&mut maps, Some(file), &mut diagnostics);
    info!("{} section(s) lost the default flag", demoted);

    let keymap = factory.create_xkb_file(FileType::Keymap, Some(file.to_string()), FileDefs::Files(maps), 0)?;
    Ok((keymap, diagnostics))
}

fn show_defaults(file: &str, sections: &[String], options: ParseOptions) -> Result<()> {
    let (keymap, diagnostics) = check_defaults(file, sections, options)?;

    for diagnostic in diagnostics.iter() {
        println!("{}", diagnostic);
    }
    for map in keymap.def.sections().into_iter().flat_map(Chain::iter) {
        let marker = if map.is_default() { "*" } else { "" };
        println!("{}: {}{}", map.id, marker, map.name.as_deref().unwrap_or(""));
    }

    let freed = free_xkb_file(Chain::from(keymap));
    println!("released {} node(s)", freed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_warning_level_controls_default_report() {
        let names = sections(&["*basic", "intl", "*dvorak"]);

        let (keymap, diagnostics) = check_defaults("us", &names, ParseOptions::new()).unwrap();
        assert_eq!(diagnostics.warning_count(), 1);
        assert_eq!(free_xkb_file(Chain::from(keymap)), 4);

        let (keymap, diagnostics) = check_defaults("us", &names, ParseOptions::new().with_warning_level(0)).unwrap();
        assert_eq!(diagnostics.warning_count(), 0);
        let defaults: Vec<_> = keymap
            .def
            .sections()
            .unwrap()
            .iter()
            .filter(|map| map.is_default())
            .map(|map| map.name.as_deref())
            .collect();
        assert_eq!(defaults, vec![Some("basic")]);
    }
}
