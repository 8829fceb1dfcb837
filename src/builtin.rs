use crate::{command::Signal, error::ShellError, prompt::Prompter};

/// Receives the whole token sequence, command name included.
pub type Handler = fn(&[String], &mut dyn Prompter) -> anyhow::Result<Signal>;

pub struct Builtin {
    pub name: &'static str,
    pub handler: Handler,
}

/// Listed by `help` in this order.
pub static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "cd",
        handler: cd,
    },
    Builtin {
        name: "help",
        handler: help,
    },
    Builtin {
        name: "exit",
        handler: exit,
    },
];

pub fn lookup(name: &str) -> Option<&'static Builtin> {
    return BUILTINS.iter().find(|builtin| return builtin.name == name);
}

fn cd(args: &[String], prompter: &mut dyn Prompter) -> anyhow::Result<Signal> {
    let Some(target) = args.get(1) else {
        prompter.report(&ShellError::MissingArgument.diagnostic())?;
        return Ok(Signal::Continue);
    };

    if let Err(e) = std::env::set_current_dir(target) {
        log::debug!("cd to {} failed: {}", target, e);
        prompter.report(&ShellError::DirectoryChange(e).diagnostic())?;
    }

    return Ok(Signal::Continue);
}

fn help(_args: &[String], prompter: &mut dyn Prompter) -> anyhow::Result<Signal> {
    let mut banner = String::from(
        "mlsh - Marijus Laucevicius Shell\n\
         Enter program's name and arguments and press enter.\n\
         Possible options:\n",
    );
    for builtin in BUILTINS {
        banner.push_str(&format!("  {}\n", builtin.name));
    }
    banner.push_str("Use man for more info.\n");

    prompter.prompt(&banner)?;

    return Ok(Signal::Continue);
}

fn exit(_args: &[String], _prompter: &mut dyn Prompter) -> anyhow::Result<Signal> {
    return Ok(Signal::Terminate);
}
