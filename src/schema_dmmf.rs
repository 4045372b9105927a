use serde::Deserialize;
use serde_json::Deserializer;
use serde_path_to_error::deserialize;
use crate::schema::{EnumType, Field, InputField, InputType, OutputType, SchemaDocument, TypeKind, TypeRef};

pub type ParseError = serde_path_to_error::Error<serde_json::Error>;

pub fn from_document_string(content: &str) -> Result<SchemaDocument, ParseError> {
    let deserializer = &mut Deserializer::from_str(content);
    let document: DocumentJson = deserialize(deserializer)?;
    Ok(to_document(document.schema))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentJson {
    schema: SchemaJson
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaJson {
    #[serde(rename = "outputTypes")]
    output_types: Vec<OutputTypeJson>,
    #[serde(rename = "inputTypes")]
    input_types: Vec<InputTypeJson>,
    enums: Vec<EnumJson>
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputTypeJson {
    name: String,
    fields: Vec<FieldJson>
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldJson {
    name: String,
    #[serde(rename = "outputType")]
    output_type: TypeRefJson,
    args: Vec<InputFieldJson>,
    #[serde(rename = "isNullable")]
    is_nullable: bool,
    #[serde(rename = "isRequired")]
    is_required: bool
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct InputTypeJson {
    name: String,
    fields: Vec<InputFieldJson>
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct InputFieldJson {
    name: String,
    #[serde(rename = "isRequired")]
    is_required: bool,
    #[serde(rename = "isNullable")]
    is_nullable: bool,
    #[serde(rename = "inputTypes")]
    input_types: Vec<TypeRefJson>
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EnumJson {
    name: String,
    values: Vec<String>
}

#[derive(Deserialize)]
#[serde(tag = "kind")]
enum TypeRefJson {
    #[serde(rename = "scalar")]
    Scalar {
        #[serde(rename = "type")]
        name: String,
        #[serde(rename = "isList")]
        is_list: bool
    },
    #[serde(rename = "object")]
    Object {
        #[serde(rename = "type")]
        name: String,
        #[serde(rename = "isList")]
        is_list: bool
    }
}

fn to_document(schema: SchemaJson) -> SchemaDocument {
    SchemaDocument {
        output_types: schema.output_types.into_iter().map(to_output_type).collect(),
        input_types: schema.input_types.into_iter().map(to_input_type).collect(),
        enums: schema.enums.into_iter().map(to_enum_type).collect()
    }
}

fn to_output_type(output_type: OutputTypeJson) -> OutputType {
    OutputType {
        name: output_type.name,
        fields: output_type.fields.into_iter().map(to_field).collect()
    }
}

fn to_field(field: FieldJson) -> Field {
    Field {
        name: field.name,
        output_type: to_type_ref(field.output_type),
        args: field.args.into_iter().map(to_input_field).collect(),
        is_nullable: field.is_nullable,
        is_required: field.is_required
    }
}

fn to_input_type(input_type: InputTypeJson) -> InputType {
    InputType {
        name: input_type.name,
        fields: input_type.fields.into_iter().map(to_input_field).collect()
    }
}

fn to_input_field(field: InputFieldJson) -> InputField {
    InputField {
        name: field.name,
        is_required: field.is_required,
        is_nullable: field.is_nullable,
        input_types: field.input_types.into_iter().map(to_type_ref).collect()
    }
}

fn to_enum_type(enum_type: EnumJson) -> EnumType {
    EnumType {
        name: enum_type.name,
        values: enum_type.values
    }
}

fn to_type_ref(type_ref: TypeRefJson) -> TypeRef {
    match type_ref {
        TypeRefJson::Scalar { name, is_list } => TypeRef { name, kind: TypeKind::Scalar, is_list },
        TypeRefJson::Object { name, is_list } => TypeRef { name, kind: TypeKind::Object, is_list }
    }
}
