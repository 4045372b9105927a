use std::collections::HashSet;
use crate::code_writer::{CodeFile, CodeFileOptions, Declaration};
use crate::schema::{Field, InputField, SchemaDocument, TypeKind, TypeRef, SCALAR_MAP};

const AGGREGATE_MARKER: &'static str = "Aggregate";
const LIST_QUERY_PREFIX: &'static str = "findMany";
const ROOT_TYPE_NAMES: &'static [&'static str] = &["Query", "Mutation"];

pub struct TypeGenerator<'a> {
    document: &'a SchemaDocument,
    options: &'a CodeFileOptions,
    client_package: &'a str
}

impl<'a> TypeGenerator<'a> {
    pub fn new(document: &'a SchemaDocument, options: &'a CodeFileOptions, client_package: &'a str) -> TypeGenerator<'a> {
        TypeGenerator { document, options, client_package }
    }

    pub fn generate(&self) -> String {
        let blocks = [
            self.preamble(),
            self.registry_interface(),
            self.resolver_interfaces(),
            self.argument_records(),
            self.input_interfaces(),
            self.enum_declarations()
        ];
        blocks.join(self.options.line_break.as_str())
    }

    fn preamble(&self) -> String {
        let mut file = CodeFile::new(self.options);
        file.line(&format!("import * as Prisma from '{}'", self.client_package));
        file.line("import { Context } from './context'");
        file.line("import { GraphQLResolveInfo } from 'graphql';");
        file.line("type Resolver<T extends {}, A extends {}, R extends any> = (parent: T, args: A, context: Context, info: GraphQLResolveInfo) => Promise<R>;");
        file.line("type CustomField = (parent: any, args: any, context: Context, info: GraphQLResolveInfo) => any");
        file.build_string()
    }

    fn registry_interface(&self) -> String {
        let mut declaration = Declaration::interface("Resolvers");
        declaration.member("[key: string]: {[key: string]: CustomField}".to_string());
        for output_type in &self.document.output_types {
            declaration.member(format!("{}?: {};", output_type.name, output_type.name));
        }
        declaration.build(self.options)
    }

    fn resolver_interfaces(&self) -> String {
        let interfaces: Vec<String> = self.document.output_types
            .iter()
            .map(|output_type| {
                let parent = parent_shape(&output_type.name);
                let mut declaration = Declaration::interface(&output_type.name);
                declaration.member("[key: string]: CustomField".to_string());
                for field in &output_type.fields {
                    let args = argument_shape(field);
                    let mut return_type = self.resolve_type(&field.output_type, false);
                    if field.is_nullable {
                        return_type.push_str(" | null");
                    }
                    if !field.is_required {
                        return_type.push_str(" | undefined");
                    }
                    declaration.member(format!("{}?: Resolver<{}, {}, {}>", field.name, parent, args, return_type));
                    if field.name.starts_with(LIST_QUERY_PREFIX) {
                        declaration.member(format!("{}Count?: Resolver<{}, {}, number>", field.name, parent, args));
                    }
                }
                declaration.build(self.options)
            })
            .collect();
        interfaces.join(self.options.line_break.as_str())
    }

    fn argument_records(&self) -> String {
        let mut records: Vec<String> = Vec::new();
        for output_type in &self.document.output_types {
            for field in &output_type.fields {
                if field.args.is_empty() {
                    continue;
                }
                let name = argument_shape(field);
                let mut declaration = Declaration::interface(&name);
                for arg in &field.args {
                    let optional = if arg.is_required { "" } else { "?" };
                    let null_suffix = if field.is_nullable { " | null" } else { "" };
                    declaration.member(format!(
                        "{}{}: {}{}",
                        arg.name,
                        optional,
                        self.resolve_type(&arg.input_types[0], true),
                        null_suffix
                    ));
                }
                if name.starts_with(AGGREGATE_MARKER) {
                    let model = field.output_type.name.replacen(AGGREGATE_MARKER, "", 1);
                    declaration.member("count?: true".to_string());
                    declaration.member(format!("avg?: Prisma.{}AvgAggregateInputType", model));
                    declaration.member(format!("sum?: Prisma.{}SumAggregateInputType", model));
                    declaration.member(format!("min?: Prisma.{}MinAggregateInputType", model));
                    declaration.member(format!("max?: Prisma.{}MaxAggregateInputType", model));
                }
                records.push(declaration.build(self.options));
            }
        }
        records.join(self.options.line_break.as_str())
    }

    fn input_interfaces(&self) -> String {
        let interfaces: Vec<String> = self.document.input_types
            .iter()
            .filter(|input_type| !input_type.fields.is_empty())
            .map(|input_type| {
                let mut declaration = Declaration::interface(&input_type.name);
                for field in &input_type.fields {
                    let variant = primary_input_variant(field);
                    if variant.kind == TypeKind::Object && self.has_empty_type_fields(&variant.name, &mut HashSet::new()) {
                        continue;
                    }
                    let optional = if field.is_required { "" } else { "?" };
                    let null_suffix = if field.is_nullable { " | null" } else { "" };
                    declaration.member(format!(
                        "{}{}: {}{}",
                        field.name,
                        optional,
                        self.resolve_type(variant, true),
                        null_suffix
                    ));
                }
                declaration.build(self.options)
            })
            .collect();
        interfaces.join(self.options.line_break.as_str())
    }

    fn enum_declarations(&self) -> String {
        let declarations: Vec<String> = self.document.enums
            .iter()
            .map(|enum_type| {
                let mut declaration = Declaration::enumeration(&enum_type.name);
                for value in &enum_type.values {
                    declaration.member(format!("{} = \"{}\",", value, value));
                }
                declaration.build(self.options)
            })
            .collect();
        declarations.concat()
    }

    fn resolve_type(&self, type_ref: &TypeRef, input_position: bool) -> String {
        let list_suffix = if type_ref.is_list { "[]" } else { "" };
        match type_ref.kind {
            TypeKind::Scalar => format!("{}{}", scalar_name(&type_ref.name), list_suffix),
            TypeKind::Object => {
                let prefix = if input_position { "" } else { "Prisma." };
                match type_ref.name.strip_prefix(AGGREGATE_MARKER) {
                    Some(model) => format!("{}Get{}AggregateType<{}Args>{}", prefix, model, type_ref.name, list_suffix),
                    None => format!("{}{}{}", prefix, type_ref.name, list_suffix)
                }
            }
        }
    }

    fn has_empty_type_fields(&self, name: &str, visited: &mut HashSet<String>) -> bool {
        visited.insert(name.to_string());
        let input_type = match self.document.input_type(name) {
            Some(input_type) => input_type,
            // unknown names resolve to the client namespace, treat as usable
            None => return false
        };
        if input_type.fields.is_empty() {
            return true;
        }
        for field in &input_type.fields {
            let variant = primary_input_variant(field);
            // a reference back to the type itself is skipped outright
            if variant.kind == TypeKind::Object
                && variant.name != name
                && !visited.contains(&variant.name)
                && self.has_empty_type_fields(&variant.name, visited)
            {
                return true;
            }
        }
        false
    }
}

pub fn primary_input_variant(field: &InputField) -> &TypeRef {
    if field.input_types.len() > 1 && field.input_types[1].kind == TypeKind::Object {
        &field.input_types[1]
    } else {
        &field.input_types[0]
    }
}

fn argument_shape(field: &Field) -> String {
    if field.args.is_empty() {
        "{}".to_string()
    } else {
        format!("{}Args", capitalize(&field.name))
    }
}

fn parent_shape(name: &str) -> String {
    if ROOT_TYPE_NAMES.contains(&name) {
        "{}".to_string()
    } else {
        format!("Prisma.{}", name)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}

fn scalar_name(name: &str) -> &'static str {
    SCALAR_MAP
        .iter()
        .find(|(scalar, _)| *scalar == name)
        .map(|(_, mapped)| *mapped)
        .unwrap_or_else(|| panic!("No scalar mapping for type \"{}\"", name))
}
