use crate::result::Result;
use time::Date;
use time::macros::format_description;

/// Default archive name template
pub const DEFAULT_FILENAME: &str = "$PRODUCT-$VERSION-$DATE.zip";

/// Resolves `$VARIABLE` references in archive name templates
#[derive(Default)]
pub struct Tpl {
    variables: Vec<(String, String)>,
}

impl Tpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable, replacing any earlier value for the same key
    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.variables.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.variables.push((key, value)),
        }
        // longest first, so `$VERSION` never eats the start of `$VERSIONS`
        self.variables.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    pub fn parse(&self, input: &str) -> String {
        self.variables
            .iter()
            .fold(input.to_string(), |acc, (key, value)| {
                acc.replace(&format!("${key}"), value)
            })
    }
}

/// Format a date as `YYMMDD`
pub fn date_stamp(date: Date) -> Result<String> {
    Ok(date.format(format_description!("[year repr:last_two][month][day]"))?)
}

/// Build the archive file name from a template, e.g. `zilf-0.9-240601.zip`
pub fn archive_filename(template: &str, product: &str, version: &str, date: Date) -> Result<String> {
    let mut tpl = Tpl::new();
    tpl.register("PRODUCT", product);
    tpl.register("VERSION", version);
    tpl.register("DATE", date_stamp(date)?);
    Ok(tpl.parse(template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_archive_filename() -> Result<()> {
        let name = archive_filename(DEFAULT_FILENAME, "zilf", "1.2", date!(2024 - 06 - 01))?;
        assert_eq!(name, "zilf-1.2-240601.zip");
        Ok(())
    }

    #[test]
    fn test_date_stamp_pads() -> Result<()> {
        assert_eq!(date_stamp(date!(2009 - 01 - 09))?, "090109");
        Ok(())
    }

    #[test]
    fn test_multiple_occurrences() {
        let mut tpl = Tpl::new();
        tpl.register("PRODUCT", "zapf");

        assert_eq!(tpl.parse("$PRODUCT/$PRODUCT"), "zapf/zapf");
    }

    #[test]
    fn test_longer_key_wins() {
        let mut tpl = Tpl::new();
        tpl.register("VERSION", "1.0");
        tpl.register("VERSIONS", "all");

        assert_eq!(tpl.parse("$VERSIONS-$VERSION"), "all-1.0");
    }

    #[test]
    fn test_reregister_replaces() {
        let mut tpl = Tpl::new();
        tpl.register("DATE", "240101");
        tpl.register("DATE", "240601");

        assert_eq!(tpl.parse("$DATE"), "240601");
    }
}
