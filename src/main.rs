use std::error::Error;
use std::{env, fs, process};

use log::info;

use dataset_vision::{vision, InterpolationMode, KernelConfig, Tensor};

// Decodes one image file and runs it through a small preprocessing chain.
fn run(path: &str, config: &KernelConfig) -> Result<Tensor, Box<dyn Error>> {
    let chain = [
        vision::decode(true),
        vision::resize(vec![224], InterpolationMode::Bilinear),
        vision::random_horizontal_flip(0.5),
        vision::normalize(vec![0.485, 0.456, 0.406], vec![0.229, 0.224, 0.225]),
    ];

    let mut tensor = Tensor::encoded(fs::read(path)?);
    for (i, op) in chain.iter().enumerate() {
        let op = op.as_ref().ok_or("invalid transform parameters")?;
        let kernel = op.build_with(&config.child(i));
        tensor = kernel.apply(&tensor)?;
        info!("{} -> {:?}", op, tensor.shape());
    }
    Ok(tensor)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <image> [seed]", args[0]);
        process::exit(2);
    }

    let config = match args.get(2).map(|seed| seed.parse::<u64>()) {
        Some(Ok(seed)) => KernelConfig::seeded(seed),
        Some(Err(err)) => {
            eprintln!("invalid seed: {}", err);
            process::exit(2);
        }
        None => KernelConfig::default(),
    };

    match run(&args[1], &config) {
        Ok(tensor) => println!("{:?}", tensor.shape()),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
