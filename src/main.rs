use std::env;
use std::ffi::OsStr;

use anyhow::Context as _;
use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use week_sheet::report::Report;
use week_sheet::schedule::Field;
use week_sheet::time::WeekDay;
use week_sheet::Config;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use core::fmt;
    use std::path::PathBuf;

    use log::error;
    use seahorse::Context;

    pub trait ErrorLike: Send + Sync + fmt::Debug + 'static {}

    impl<E: Send + Sync + fmt::Debug + 'static> ErrorLike for E {}

    /// seahorse actions can not return errors, so they are logged here and
    /// the process exits with a failure code.
    pub fn exit_on_error<E>(result: Result<(), E>)
    where
        E: ErrorLike,
    {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_path_flag(&self, name: &str) -> Option<PathBuf> {
            self.context().string_flag(name).ok().map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let mut config = Config::builder();

    if let Some(dir) = context.optional_path_flag("dir") {
        config.storage_dir(dir);
    }

    let config = config.build()?;

    info!("using {}", config.storage().path().display());

    Ok(config)
}

fn show(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let store = config.open_store();

    print!("{}", Report::new(store.schedule(), &store.overview()));

    Ok(())
}

fn set(context: &Context) -> anyhow::Result<()> {
    let (day, field, value) = match context.args.as_slice() {
        [day, field] => (day, field, None),
        [day, field, value] => (day, field, Some(value.as_str())),
        _ => {
            return Err(anyhow::anyhow!(
                "expected a day, a field and optionally a time"
            ))
        }
    };

    let day: WeekDay = day.parse()?;
    let field: Field = field.parse()?;

    let config = build_config(context)?;
    let mut store = config.open_store();

    let (schedule, overview) = week_sheet::update_day(&mut store, day, field, value)
        .with_context(|| format!("failed to update {}", day.english_name().to_lowercase()))?;

    print!("{}", Report::new(&schedule, &overview));

    Ok(())
}

fn clear(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let mut store = config.open_store();

    let (schedule, overview) = week_sheet::clear_week(&mut store, context.bool_flag("yes"))?;

    print!("{}", Report::new(&schedule, &overview));

    Ok(())
}

fn dir_flag() -> Flag {
    Flag::new("dir", FlagType::String).description(
        "[optional] Directory of the stored schedule. Default: the data directory of the user",
    )
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let show_command = Command::new("show")
        .usage(format!("{} show [args]", args[0]))
        .description("Shows the times of the week, the total and the suggested clock-out.")
        .flag(dir_flag())
        .action(|context| exit_on_error(show(context)));

    let set_command = Command::new("set")
        .usage(format!("{} set [args] <day> <in|out> [HH:MM]", args[0]))
        .description("Sets the clock-in or clock-out of a day, leaving out the time clears it.")
        .flag(dir_flag())
        .action(|context| exit_on_error(set(context)));

    let clear_command = Command::new("clear")
        .usage(format!("{} clear --yes [args]", args[0]))
        .description("Deletes all times of the week.")
        .flag(dir_flag())
        .flag(
            Flag::new("yes", FlagType::Bool)
                .description("Confirms that all data should be deleted."),
        )
        .action(|context| exit_on_error(clear(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(show_command)
        .command(set_command)
        .command(clear_command);

    app.run(args);
}
