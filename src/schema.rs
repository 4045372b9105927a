pub struct SchemaDocument {
    pub output_types: Vec<OutputType>,
    pub input_types: Vec<InputType>,
    pub enums: Vec<EnumType>
}

impl SchemaDocument {
    pub fn input_type(&self, name: &str) -> Option<&InputType> {
        self.input_types.iter().find(|input_type| input_type.name == name)
    }
}

pub struct OutputType {
    pub name: String,
    pub fields: Vec<Field>
}

pub struct Field {
    pub name: String,
    pub output_type: TypeRef,
    pub args: Vec<InputField>,
    pub is_nullable: bool,
    pub is_required: bool
}

pub struct InputType {
    pub name: String,
    pub fields: Vec<InputField>
}

pub struct InputField {
    pub name: String,
    pub is_required: bool,
    pub is_nullable: bool,
    pub input_types: Vec<TypeRef>
}

pub struct EnumType {
    pub name: String,
    pub values: Vec<String>
}

pub struct TypeRef {
    pub name: String,
    pub kind: TypeKind,
    pub is_list: bool
}

#[derive(Clone, Copy, PartialEq)]
pub enum TypeKind {
    Scalar,
    Object
}

pub const SCALAR_MAP: &'static [(&'static str, &'static str)] = &[
    ("Int", "number"),
    ("Float", "number"),
    ("String", "string"),
    ("Boolean", "boolean"),
    ("DateTime", "Date")
];
