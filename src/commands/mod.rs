mod conv;
mod dec;
mod enc;
mod info;
mod list;
mod verify;

pub use conv::{describe, run_conv};
pub use dec::run_decode;
pub use enc::run_encode;
pub use info::run_info;
pub use list::run_list;
pub use verify::run_verify;

use serde::Serialize;

use crate::io::write_line;
use radixconv::error::{RadixError, Result};
use radixconv::types::{Context, InputSource, OutputDest};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{}", json);
    Ok(())
}

pub struct ConvCommand {
    pub digits: InputSource,
    pub from: String,
    pub to: String,
    pub output: OutputDest,
    pub json: bool,
}

impl CommandHandler for ConvCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_conv(ctx, &self.from, &self.to, &self.digits)?;
        if self.json {
            return print_json(&result);
        }
        write_line(&describe(&result), &self.output)
    }
}

pub struct DecCommand {
    pub digits: InputSource,
    pub base: String,
    pub json: bool,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_decode(ctx, &self.base, &self.digits)?;
        if self.json {
            return print_json(&result);
        }
        println!("{}", result.value);
        Ok(())
    }
}

pub struct EncCommand {
    pub number: InputSource,
    pub base: String,
    pub output: OutputDest,
    pub json: bool,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_encode(ctx, &self.base, &self.number)?;
        if self.json {
            return print_json(&result);
        }
        write_line(&result.output, &self.output)
    }
}

pub struct VerifyCommand {
    pub digits: InputSource,
    pub base: String,
    pub json: bool,
}

impl CommandHandler for VerifyCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_verify(ctx, &self.base, &self.digits)?;
        if self.json {
            print_json(&result)?;
        } else if result.valid {
            println!("valid");
        } else {
            println!("invalid: {}", result.error.as_deref().unwrap_or_default());
        }
        if !result.valid {
            return Err(RadixError::invalid_input(result.error.unwrap_or_default()));
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub base: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let meta = run_info(ctx, &self.base)?;
        if self.json {
            return print_json(&meta);
        }
        println!("Name:        {}", meta.name);
        println!("Base:        {}", meta.base);
        println!("Aliases:     {}", if meta.aliases.is_empty() { "-".to_string() } else { meta.aliases.join(", ") });
        println!("Alphabet:    {}", meta.alphabet);
        println!("Case:        {:?}", meta.case_sensitivity);
        println!("Chunk:       {} digits per u64", meta.chunk_digits);
        Ok(())
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let bases = run_list(ctx);
        if self.json {
            return print_json(&bases);
        }
        println!("{:<8} {:<20} ALPHABET", "NAME", "ALIASES");
        println!("{}", "-".repeat(60));
        for meta in bases {
            let aliases = if meta.aliases.is_empty() { "-".to_string() } else { meta.aliases.join(", ") };
            println!("{:<8} {:<20} {}", meta.name, aliases, meta.alphabet);
        }
        Ok(())
    }
}
