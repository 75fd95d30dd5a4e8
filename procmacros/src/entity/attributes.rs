//! Parsing of `#[table(...)]` and `#[column(...)]` attributes.

use heck::ToSnakeCase;
use syn::ext::IdentExt;
use syn::{Attribute, Error, Field, Ident, LitStr, Result};

#[derive(Debug)]
pub(crate) struct TableAttrs {
    pub name: String,
    pub schema: Option<String>,
}

impl TableAttrs {
    pub(crate) fn parse(struct_ident: &Ident, attrs: &[Attribute]) -> Result<Self> {
        let mut name = None;
        let mut schema = None;

        for attr in attrs.iter().filter(|a| a.path().is_ident("table")) {
            attr.parse_nested_meta(|meta| {
                let path_ident = meta
                    .path
                    .get_ident()
                    .ok_or_else(|| meta.error("expected identifier"))?;

                match path_ident.to_string().as_str() {
                    "name" => {
                        let lit: LitStr = meta.value()?.parse()?;
                        name = Some(non_blank(&lit, "table name")?);
                    }
                    "schema" => {
                        let lit: LitStr = meta.value()?.parse()?;
                        schema = Some(non_blank(&lit, "schema")?);
                    }
                    other => {
                        return Err(meta.error(format!(
                            "unknown table attribute `{other}`, expected `name` or `schema`"
                        )));
                    }
                }
                Ok(())
            })?;
        }

        Ok(Self {
            name: name.unwrap_or_else(|| struct_ident.unraw().to_string().to_snake_case()),
            schema,
        })
    }
}

#[derive(Debug, Default)]
pub(crate) struct ColumnAttrs {
    pub name: Option<String>,
    pub key: bool,
    pub identity: bool,
    pub ignore: bool,
    pub read_only: bool,
    pub no_select: bool,
    pub no_insert: bool,
    pub no_update: bool,
    pub concurrency: bool,
    pub insert_sql: Option<String>,
    pub update_sql: Option<String>,
}

/// One mapped struct field.
#[derive(Debug)]
pub(crate) struct ColumnInfo {
    pub ident: Ident,
    pub property: String,
    pub column: String,
    pub attrs: ColumnAttrs,
}

impl ColumnInfo {
    /// Returns `None` for `#[column(ignore)]` fields.
    pub(crate) fn parse(field: &Field) -> Result<Option<Self>> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new_spanned(field, "Entity requires named fields"))?;
        let attrs = ColumnAttrs::parse(&field.attrs)?;
        if attrs.ignore {
            return Ok(None);
        }

        let property = ident.unraw().to_string();
        let column = attrs.name.clone().unwrap_or_else(|| property.clone());
        Ok(Some(Self {
            ident,
            property,
            column,
            attrs,
        }))
    }
}

impl ColumnAttrs {
    fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("column")) {
            attr.parse_nested_meta(|meta| {
                let path_ident = meta
                    .path
                    .get_ident()
                    .ok_or_else(|| meta.error("expected identifier"))?;

                match path_ident.to_string().as_str() {
                    "name" => {
                        let lit: LitStr = meta.value()?.parse()?;
                        out.name = Some(non_blank(&lit, "column name")?);
                    }
                    "insert_sql" => {
                        let lit: LitStr = meta.value()?.parse()?;
                        out.insert_sql = Some(non_blank(&lit, "insert_sql")?);
                    }
                    "update_sql" => {
                        let lit: LitStr = meta.value()?.parse()?;
                        out.update_sql = Some(non_blank(&lit, "update_sql")?);
                    }
                    "key" => out.key = true,
                    "identity" => out.identity = true,
                    "ignore" => out.ignore = true,
                    "read_only" => out.read_only = true,
                    "no_select" => out.no_select = true,
                    "no_insert" => out.no_insert = true,
                    "no_update" => out.no_update = true,
                    "concurrency" => out.concurrency = true,
                    other => {
                        return Err(meta.error(format!("unknown column attribute `{other}`")));
                    }
                }
                Ok(())
            })?;
        }

        if out.ignore && (out.key || out.identity || out.name.is_some()) {
            return Err(Error::new(
                proc_macro2::Span::call_site(),
                "`ignore` cannot be combined with other column attributes",
            ));
        }

        Ok(out)
    }
}

fn non_blank(lit: &LitStr, what: &str) -> Result<String> {
    let value = lit.value();
    if value.trim().is_empty() {
        return Err(Error::new(lit.span(), format!("{what} cannot be empty")));
    }
    Ok(value)
}
