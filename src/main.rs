use clap::Parser;

use pic2ascii::cli::{self, Args, Command};
use pic2ascii::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(Command::Config { action }) = &args.command {
        cli::handle_config_action(action.clone(), args.config.as_deref());
        return;
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let settings = cli::Settings::resolve(&args, &config);

    let image = match args.image.clone() {
        Some(path) => path,
        None => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            match cli::prompt_image_path(&mut stdin.lock(), &mut stdout) {
                Ok(path) => path,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match cli::run_conversion(&image, &settings) {
        Ok(output) => println!("Done! ASCII art written to {}", output.display()),
        Err(e) => {
            log::warn!("conversion of {} failed: {:?}", image.display(), e.status());
            eprintln!("Conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}
