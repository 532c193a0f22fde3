mod config;
use config::Config;

mod render;

fn init_logger() -> anyhow::Result<()> {
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from(&[".env", ".env.dev"]);
    init_logger()?;

    let config = Config::load()?;

    let result = telltale::from_env();
    log::debug!(
        "long: {}, short: {}, args: {}",
        result.long.len(),
        result.short.len(),
        result.args.len()
    );

    let output = config.output.format.render(&result, config.output.pretty)?;
    println!("{}", output);
    Ok(())
}
