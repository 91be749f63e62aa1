use argcalc::eval::Invocation;

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum Format {
    #[default]
    Long,
    Json,
}

impl Format {
    pub fn into_error_hook(self) -> miette::ErrorHook {
        match self {
            Self::Long => Box::new(|_| Box::new(miette::GraphicalReportHandler::new())),
            Self::Json => Box::new(|_| Box::new(miette::JSONReportHandler::new())),
        }
    }
}

#[derive(clap::Parser)]
#[command(about, version)]
pub(crate) struct Args {
    /// First number
    #[arg(long, allow_negative_numbers = true)]
    first: Option<String>,

    /// Second number
    #[arg(long, allow_negative_numbers = true)]
    second: Option<String>,

    /// Operator (+, -, *, /)
    #[arg(long)]
    operator: Option<String>,

    /// Render style for error messages
    #[arg(long, value_enum, ignore_case = true, default_value("long"))]
    format: Format,
}

impl Args {
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn into_invocation(self) -> Invocation {
        Invocation::new(self.first, self.second, self.operator)
    }
}
