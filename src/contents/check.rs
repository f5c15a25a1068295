//! Contents validation pipeline
//!
//! Runs the section validators in a fixed order and stops at the first
//! failure. Options are only read; checking a document twice gives the same
//! answer.

use crate::contents::arguments::check_arguments;
use crate::contents::attributes::check_attributes;
use crate::contents::document::Document;
use crate::contents::error::ContentsError;
use crate::contents::example::check_example;
use crate::contents::import::check_import;
use crate::contents::options::CheckOptions;
use crate::contents::signature::check_signature;
use crate::contents::timeouts::check_timeouts;
use crate::contents::title::check_title;

impl Document {
    /// Check every section of the document
    ///
    /// `subcategory` is the frontmatter subcategory, used only to decide
    /// whether the enhanced region check applies.
    pub fn check(&self, opts: &CheckOptions, subcategory: Option<&str>) -> Result<(), ContentsError> {
        if opts.ignore_contents_check.contains(&self.resource_name) {
            log::debug!("Skipping contents check for {}", self.resource_name);
            return Ok(());
        }

        let sections = &self.sections;

        check_title(sections.title.as_ref(), &self.resource_name, &opts.title)?;
        check_example(sections.example.as_ref(), &opts.example)?;
        check_arguments(
            sections.arguments.as_ref(),
            &opts.arguments,
            self.region_aware(opts, subcategory),
        )?;
        check_attributes(sections.attributes.as_ref(), &opts.attributes)?;
        check_timeouts(sections.timeouts.as_ref(), &opts.timeouts)?;
        check_import(sections.import.as_ref(), &self.resource_name, &opts.import)?;

        if let Some(signature) = &opts.signature {
            check_signature(sections.signature.as_ref(), signature)?;
        }

        Ok(())
    }

    /// Region awareness after applying the region ignore lists
    fn region_aware(&self, opts: &CheckOptions, subcategory: Option<&str>) -> bool {
        if !opts.arguments.region_aware {
            return false;
        }

        if opts.ignore_region_check.contains(&self.resource_name) {
            log::debug!("Ignoring region check for {}", self.resource_name);
            return false;
        }

        match subcategory {
            Some(sub) if opts.ignore_region_check_subcategories.iter().any(|s| s == sub) => {
                log::debug!(
                    "Ignoring region check for {} in subcategory {}",
                    self.resource_name,
                    sub
                );
                false
            }
            _ => true,
        }
    }
}
