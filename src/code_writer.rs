pub struct CodeFileOptions {
    pub line_break: String,
    pub indent: String,
}

pub struct CodeFile {
    line_break: String,
    indent_sign: String,
    indent_level: usize,
    content: String
}

impl CodeFile {
    pub fn new(options: &CodeFileOptions) -> CodeFile {
        CodeFile {
            line_break: options.line_break.clone(),
            indent_sign: options.indent.clone(),
            indent_level: 0,
            content: String::new()
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn deindent(&mut self) {
        if self.indent_level == 0 {
            panic!("Cannot deindent, indent level is already 0")
        } else {
            self.indent_level -= 1;
        }
    }

    pub fn line(&mut self, code: &str) {
        let indent = self.indent_sign.repeat(self.indent_level);
        self.content.push_str(&indent);
        self.content.push_str(code);
        self.content.push_str(&self.line_break);
    }

    pub fn begin_indent(&mut self, code: &str) {
        self.line(code);
        self.indent();
    }

    pub fn end_indent(&mut self, code: &str) {
        self.deindent();
        self.line(code);
    }

    pub fn build_string(self) -> String {
        self.content
    }
}

pub struct Declaration {
    open: String,
    members: Vec<String>
}

impl Declaration {
    pub fn interface(name: &str) -> Declaration {
        Declaration {
            open: format!("export interface {} {{", name),
            members: Vec::new()
        }
    }

    pub fn enumeration(name: &str) -> Declaration {
        Declaration {
            open: format!("export enum {} {{", name),
            members: Vec::new()
        }
    }

    pub fn member(&mut self, member: String) {
        self.members.push(member);
    }

    pub fn build(&self, options: &CodeFileOptions) -> String {
        let mut file = CodeFile::new(options);
        file.begin_indent(&self.open);
        for member in &self.members {
            file.line(member);
        }
        file.end_indent("}");
        file.build_string()
    }
}
