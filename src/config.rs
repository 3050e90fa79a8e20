// src/config.rs
use mailtally_domain::{EmailShapePolicy, ExtractionMode, ImportConfig};
use mailtally_shared_kernel::MailtallyError;

use crate::cli::Args;

impl TryFrom<&Args> for ImportConfig {
    type Error = MailtallyError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let policy =
            if args.strict_emails { EmailShapePolicy::RequireNonEmptyParts } else { EmailShapePolicy::Literal };
        let mode = if args.streaming { ExtractionMode::Streaming } else { ExtractionMode::Buffered };

        let mut builder = ImportConfig::builder();
        builder.source(args.path.clone()).column(args.column).order(args.order).policy(policy).mode(mode);
        Ok(ImportConfig::from_builder(&builder)?)
    }
}
