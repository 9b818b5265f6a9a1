use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "radixconv")]
#[command(about = "Convert numerals between bases 2 through 36")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Convert digits from one base to another")]
    Conv {
        #[arg(help = "Digits to convert (- for stdin, @file to read a file)")]
        digits: String,

        #[arg(help = "Base of the given digits (2-36 or a name such as hex)")]
        from: String,

        #[arg(help = "Base to convert to")]
        to: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode digits to a decimal number")]
    Dec {
        #[arg(help = "Digits to decode (- for stdin, @file to read a file)")]
        digits: String,

        #[arg(long, short = 'b', default_value = "16")]
        base: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Encode a decimal number as digits")]
    Enc {
        #[arg(help = "Decimal number to encode (- for stdin, @file to read a file)", allow_hyphen_values = true)]
        number: String,

        #[arg(long, short = 'b', default_value = "16")]
        base: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Check that digits are valid in a base")]
    Verify {
        digits: String,

        #[arg(long, short = 'b', default_value = "16")]
        base: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show details of a base")]
    Info {
        base: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "List supported bases")]
    List {
        #[arg(long)]
        json: bool,
    },
}
