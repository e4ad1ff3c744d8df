//! A tool for decompilation of files via the RetDec IDA plugin.
//!
//! The supported decompilation modes are:
//!
//! * full: decompile the entire input file,
//! * selective: decompile only the function selected by the given address.

use std::io::Write;
use std::io;

use clap::App;
use clap::AppSettings;
use clap::Arg;
use clap::ArgMatches;
use tracing_subscriber::EnvFilter;
use tracing_subscriber;

use VERSION;
use address::Address;
use decompilation::DecompilationArguments;
use decompilation::DecompilationMode;
use decompiler::Decompiler;
use error::Result;
use error::ResultExt;
use settings::Settings;

fn parse_args<'a>(args: &Vec<String>) -> Result<ArgMatches<'a>> {
    let matches = App::new("run-decompile")
        .version(VERSION)
        .about("Decompiles the given file via the RetDec IDA plugin.")
        .setting(AppSettings::ColorNever)
        .arg(Arg::with_name("FILE")
            .required(true)
            .help("The input file."))
        .arg(Arg::with_name("output")
            .short("o")
            .long("output")
            .takes_value(true)
            .value_name("FILE")
            .help("Output file (default: FILE.c). All but the last component must exist."))
        .arg(Arg::with_name("ida_dir")
            .short("i")
            .long("ida")
            .takes_value(true)
            .value_name("DIR")
            // It is important not to require the IDA directory because it
            // enables the use of the IDA_DIR environment variable.
            .help("Path to the IDA directory (default: $IDA_DIR)."))
        .arg(Arg::with_name("idb")
            .short("d")
            .long("idb")
            .takes_value(true)
            .value_name("FILE")
            .help("IDA DB file associated with the input file."))
        .arg(Arg::with_name("select")
            .short("s")
            .long("select")
            .takes_value(true)
            .value_name("ADDRESS")
            .validator(validate_address)
            .help("Decompile only the function selected by the given address \
                   (any address inside the function). Examples: 0x1000, 4096."))
        .arg(Arg::with_name("ea64")
            .long("ea64")
            .help("Use the 64-bit address space plugin, i.e. the retdec64 library \
                   and the idat64 executable."))
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("Print diagnostic messages to the standard error."))
        .get_matches_from_safe(args)?;
    Ok(matches)
}

fn validate_address(addr: String) -> ::std::result::Result<(), String> {
    Address::parse(&addr)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn settings_from_matches(args: &ArgMatches, mut settings: Settings) -> Settings {
    if let Some(ida_dir) = args.value_of_os("ida_dir") {
        settings.set_ida_dir(ida_dir);
    }
    settings.set_ea64(args.is_present("ea64"));
    settings
}

fn decompilation_args_from_matches(args: &ArgMatches) -> Result<DecompilationArguments> {
    let mut decompilation_args = DecompilationArguments::new();
    if let Some(input_file) = args.value_of_os("FILE") {
        decompilation_args = decompilation_args.with_input_file(input_file);
    }
    if let Some(output_file) = args.value_of_os("output") {
        decompilation_args = decompilation_args.with_output_file(output_file);
    }
    if let Some(idb_file) = args.value_of_os("idb") {
        decompilation_args = decompilation_args.with_idb_file(idb_file);
    }
    if let Some(addr) = args.value_of("select") {
        let addr = Address::parse(addr)?;
        decompilation_args = decompilation_args.with_mode(DecompilationMode::Selective(addr));
    }
    Ok(decompilation_args)
}

fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    // Fails only when a subscriber has already been installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn print_command(cmd: &str) -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "RUN: {}", cmd)
        .and_then(|_| stdout.flush())
        .chain_err(|| "failed to print the command on the standard output")?;
    Ok(())
}

fn run(args: &Vec<String>) -> Result<i32> {
    let args = parse_args(args)?;
    init_logging(args.is_present("verbose"));

    let settings = settings_from_matches(&args, Settings::new());
    let decompilation_args = decompilation_args_from_matches(&args)?;

    let decompiler = Decompiler::new(settings);
    let prepared = decompiler.prepare(&decompilation_args)?;
    print_command(&prepared.command().to_string())?;
    let outcome = decompiler.run(&prepared)?;
    Ok(outcome.exit_code())
}

generate_main_for_tool!(run);
