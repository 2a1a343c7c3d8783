//! Class generator - renders a PHP class with PDO CRUD methods from a class spec

use std::io::{self, Write};
use tracing::{debug, warn};

use crate::config::CodegenConfig;
use crate::parser::ClassSpec;

use super::doc_comment::MethodDoc;
use super::naming::to_lower;

/// Properties `update()` leaves out of its SET clause
pub const UPDATE_EXCLUDED_PROPERTIES: &[&str] = &["ID", "conn", "table_name"];

/// Name of the exists check; get-if-exists shares it unless renamed
pub const CHECK_IF_EXISTS_NAME: &str = "checkIfExists";

/// Name used when `rename_get_if_exists` is set
pub const GET_IF_EXISTS_NAME: &str = "getIfExists";

/// Render the complete class file
pub fn render_class(spec: &ClassSpec, config: &CodegenConfig) -> String {
    let ctx = Context::new(spec, config);
    let mut code = String::new();

    debug!("Generating opening for class {}", spec.name);
    code.push_str(&generate_opening(&ctx));
    debug!("Generating constructor");
    code.push_str(&generate_constructor(&ctx));
    debug!("Generating read method");
    code.push_str(&generate_read(&ctx));
    debug!("Generating readOne method");
    code.push_str(&generate_read_one(&ctx));
    debug!("Generating readPaging method");
    code.push_str(&generate_read_paging(&ctx));
    debug!("Generating count method");
    code.push_str(&generate_count(&ctx));
    debug!("Generating checkIfExists method");
    code.push_str(&generate_check_if_exists(&ctx));
    debug!("Generating get-if-exists method");
    code.push_str(&generate_get_if_exists(&ctx));
    debug!("Generating insert method");
    code.push_str(&generate_insert(&ctx));
    debug!("Generating update method");
    code.push_str(&generate_update(&ctx));
    debug!("Generating remove method");
    code.push_str(&generate_remove(&ctx));
    debug!("Generating closing");
    code.push_str(&generate_closing());

    code
}

/// Render the class and write it to `out`
pub fn emit_class<W: Write>(
    spec: &ClassSpec,
    config: &CodegenConfig,
    out: &mut W,
) -> io::Result<()> {
    out.write_all(render_class(spec, config).as_bytes())
}

/// Values every section needs
struct Context<'a> {
    spec: &'a ClassSpec,
    /// Lowercased class name used throughout the doc text
    lower: String,
    wrap_width: usize,
    rename_get_if_exists: bool,
}

impl<'a> Context<'a> {
    fn new(spec: &'a ClassSpec, config: &CodegenConfig) -> Self {
        Self {
            spec,
            lower: to_lower(&spec.name),
            wrap_width: config.wrap_width,
            rename_get_if_exists: config.rename_get_if_exists,
        }
    }

    fn doc(&self, doc: MethodDoc) -> String {
        doc.render(self.wrap_width)
    }
}

/// Append `text` indented by `depth` tabs
fn line(code: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        code.push('\t');
    }
    code.push_str(text);
    code.push('\n');
}

/// `if($stmt->execute()) { return true; } else { return false; }`
fn push_execute_result(code: &mut String) {
    line(code, 3, "if($stmt->execute())");
    line(code, 3, "{");
    line(code, 4, "return true;");
    line(code, 3, "}");
    line(code, 3, "else");
    line(code, 3, "{");
    line(code, 4, "return false;");
    line(code, 3, "}");
}

/// Opening tag, class comment, declaration and properties
fn generate_opening(ctx: &Context) -> String {
    let mut code = String::from("<?php \n");
    line(&mut code, 1, "/**");
    line(
        &mut code,
        1,
        &format!(
            " * Class used to handle CRUD operations related to {}s. ",
            ctx.lower
        ),
    );
    line(&mut code, 1, " */");
    line(&mut code, 1, &format!("class {}", ctx.spec.name));
    line(&mut code, 1, "{");
    for field in &ctx.spec.fields {
        line(&mut code, 2, &format!("public ${};", field));
    }
    line(&mut code, 2, "private $conn;");
    line(
        &mut code,
        2,
        &format!("private $table_name = \"{}\";", ctx.spec.table_name),
    );
    code.push('\n');
    code
}

fn generate_constructor(ctx: &Context) -> String {
    let mut code = ctx.doc(
        MethodDoc::new(
            format!("Constructor to create an {} object.", ctx.lower),
            format!(
                "Creates {} object by setting the $conn to a PDO object",
                ctx.spec.name
            ),
            &ctx.spec.name,
        )
        .param("PDO", "$db a configured pdo connection obj"),
    );
    line(&mut code, 2, "public function __construct($db)");
    line(&mut code, 2, "{");
    line(&mut code, 3, "$this->conn = $db;");
    line(&mut code, 2, "}");
    code.push('\n');
    code
}

fn generate_read(ctx: &Context) -> String {
    let mut code = ctx.doc(MethodDoc::new(
        format!("Retrieves all records from {}s view.", ctx.lower),
        format!(
            "Prepares and executes a simple Select statement to retrieve all records in the {} view.",
            ctx.lower
        ),
        "PDOStatement",
    ));
    line(&mut code, 2, "//Selects all records");
    line(&mut code, 2, "public function read()");
    line(&mut code, 2, "{");
    line(&mut code, 3, "$query = \"SELECT * ");
    line(&mut code, 4, "FROM \" . $this->table_name . \"");
    line(&mut code, 4, " ORDER BY ID ASC\";");
    code.push('\n');
    line(&mut code, 3, "//prepare query");
    line(&mut code, 3, "$stmt = $this->conn->prepare($query);");
    code.push('\n');
    line(&mut code, 3, "//execute");
    line(&mut code, 3, "$stmt->execute();");
    code.push('\n');
    line(&mut code, 3, "return $stmt;");
    line(&mut code, 2, "}");
    code.push('\n');
    code
}

/// Reproduces the long-standing `WHERE Id = ? WHERE LIMIT 0,1` filter verbatim.
fn generate_read_one(ctx: &Context) -> String {
    let mut code = ctx.doc(MethodDoc::new(
        format!("Retrieves one {} record by ID", ctx.lower),
        format!(
            "Prepares and executes a simple Select statement retrieving all values for one record and updates the {} object.",
            ctx.lower
        ),
        "void",
    ));
    line(&mut code, 2, "public function readOne() : void");
    line(&mut code, 2, "{");
    line(&mut code, 3, "//query to read single record");
    line(&mut code, 3, "$query = \"SELECT * ");
    line(&mut code, 4, "FROM \" . $this->table_name . \"");
    line(&mut code, 4, " WHERE Id = ?");
    line(&mut code, 4, " WHERE LIMIT 0,1\";");
    code.push('\n');
    line(&mut code, 3, "//prepare query");
    line(&mut code, 3, "$stmt = $this->conn->prepare($query);");
    code.push('\n');
    line(&mut code, 3, "//bind id of record to read");
    line(&mut code, 3, "$stmt->bindParam(1, $this->Id);");
    code.push('\n');
    line(&mut code, 3, "//execute query");
    line(&mut code, 3, "$stmt->execute();");
    code.push('\n');
    line(&mut code, 3, "//get retrieved row");
    line(&mut code, 3, "$row = $stmt->fetch(PDO::FETCH_ASSOC);");
    code.push('\n');
    code.push_str(&generate_assignments_from_row(&ctx.spec.fields));
    line(&mut code, 2, "}");
    code.push('\n');
    code
}

/// `$this->Field = $row['Field'];` for every field
fn generate_assignments_from_row(fields: &[String]) -> String {
    let mut code = String::new();
    for field in fields {
        line(&mut code, 3, &format!("$this->{} = $row['{}'];", field, field));
    }
    code
}

fn generate_read_paging(ctx: &Context) -> String {
    let mut code = ctx.doc(
        MethodDoc::new(
            format!(
                "Retrieves a certain number of records from {} view.",
                ctx.lower
            ),
            format!(
                "Prepares and executes a simple Select statement to retrieve records starting from an id to a certain id in the {} view.",
                ctx.lower
            ),
            "PDOStatement",
        )
        .param("int", "$from_record_num first record to display")
        .param("int", "$records_per_page total number of records to retrieve"),
    );
    line(
        &mut code,
        2,
        "public function readPaging($from_record_num, $records_per_page)",
    );
    line(&mut code, 2, "{");
    line(&mut code, 3, "// select query");
    line(&mut code, 3, "$query = \"SELECT * ");
    line(&mut code, 4, "FROM \" . $this->table_name . \"");
    line(&mut code, 4, "ORDER BY ID ASC");
    line(&mut code, 4, "LIMIT ?, ?\";");
    line(&mut code, 3, "// prepare query statement");
    line(&mut code, 3, "$stmt = $this->conn->prepare( $query );");
    code.push('\n');
    line(&mut code, 3, "// bind variable values");
    line(
        &mut code,
        3,
        "$stmt->bindParam(1, $from_record_num, PDO::PARAM_INT);",
    );
    line(
        &mut code,
        3,
        "$stmt->bindParam(2, $records_per_page, PDO::PARAM_INT);",
    );
    code.push('\n');
    line(&mut code, 3, "// execute query");
    line(&mut code, 3, "$stmt->execute();");
    code.push('\n');
    line(&mut code, 3, "// return values from database");
    line(&mut code, 3, "return $stmt;");
    line(&mut code, 2, "}");
    code.push('\n');
    code
}

fn generate_count(ctx: &Context) -> String {
    let mut code = ctx.doc(MethodDoc::new(
        format!(
            "Retrieves the total number of records in {} view.",
            ctx.lower
        ),
        format!(
            "Prepares and executes a simple Select statement retrieving the count for all rows in the {} view.",
            ctx.lower
        ),
        "int",
    ));
    line(&mut code, 2, "//Retrieves total number of rows in table");
    line(&mut code, 2, "public function count(): int");
    line(&mut code, 2, "{");
    line(
        &mut code,
        3,
        "$query = \"SELECT COUNT(*) as count FROM \" . $this->table_name . \"\";",
    );
    line(&mut code, 3, "$stmt = $this->conn->prepare($query);");
    line(&mut code, 3, "$stmt->execute();");
    line(&mut code, 3, "$row = $stmt->fetch(PDO::FETCH_ASSOC);");
    line(&mut code, 3, "return $row['count'];");
    line(&mut code, 2, "}");
    code.push('\n');
    code
}

fn generate_check_if_exists(ctx: &Context) -> String {
    let doc = MethodDoc::new(
        format!("Checks if an {} object exists in the database.", ctx.lower),
        format!(
            "Prepares and executes a simple Select count statement to see if there are multiple {} records with the same fields",
            ctx.lower
        ),
        "bool",
    );
    generate_exists_method(ctx, doc, CHECK_IF_EXISTS_NAME, "SELECT Count(*) as count")
}

fn generate_get_if_exists(ctx: &Context) -> String {
    let method_name = if ctx.rename_get_if_exists {
        GET_IF_EXISTS_NAME
    } else {
        warn!(
            "Emitting get-if-exists as a second {}() in class {}; set rename_get_if_exists to emit {}()",
            CHECK_IF_EXISTS_NAME, ctx.spec.name, GET_IF_EXISTS_NAME
        );
        CHECK_IF_EXISTS_NAME
    };
    let doc = MethodDoc::new(
        format!(
            "Checks if an {} object exists in the database using currently set properties.",
            ctx.lower
        ),
        format!(
            "Prepares and executes a simple Select statement that retrieves an {} object from the database with currently set properties",
            ctx.lower
        ),
        "bool",
    );
    generate_exists_method(ctx, doc, method_name, "SELECT *")
}

/// Shared body of the two exists checks: a query filtered on every field
fn generate_exists_method(
    ctx: &Context,
    doc: MethodDoc,
    method_name: &str,
    select: &str,
) -> String {
    let mut code = ctx.doc(doc);
    line(
        &mut code,
        2,
        &format!("public function {}() : bool", method_name),
    );
    line(&mut code, 2, "{");
    line(&mut code, 3, &format!("$query = \"{}", select));

    let mut query_lines = vec![" FROM \" . $this->table_name . \"".to_string()];
    query_lines.extend(build_where_conditions(&ctx.spec.fields));
    let last = query_lines.len() - 1;
    for (i, query_line) in query_lines.iter().enumerate() {
        if i == last {
            line(&mut code, 4, &format!("{}\";", query_line));
        } else {
            line(&mut code, 4, query_line);
        }
    }

    code.push('\n');
    line(&mut code, 3, "//prepare query");
    line(&mut code, 3, "$stmt = $this->conn->prepare($query);");
    line(&mut code, 3, "$stmt->execute();");
    line(&mut code, 3, "$row = $stmt->fetch(PDO::FETCH_ASSOC);");
    line(&mut code, 3, "if($row['count'] > 0)");
    line(&mut code, 3, "{");
    line(&mut code, 4, "return true;");
    line(&mut code, 3, "}");
    line(&mut code, 3, "return false;");
    line(&mut code, 2, "}");
    code.push('\n');
    code
}

/// `WHERE a = " . $this->a . "`, then `AND b = ...` for the remaining fields
fn build_where_conditions(fields: &[String]) -> Vec<String> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let keyword = if i == 0 { "WHERE" } else { "AND" };
            format!("{} {} = \" . $this->{} . \"", keyword, field, field)
        })
        .collect()
}

/// `a=:a, b=:b` pairs, two per line
fn build_insert_assignments(fields: &[String]) -> Vec<String> {
    fields
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|field| format!("{}=:{}", field, field))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect()
}

fn generate_insert(ctx: &Context) -> String {
    let fields = &ctx.spec.fields;
    let mut code = ctx.doc(MethodDoc::new(
        format!("Inserts a record into the {} table.", ctx.lower),
        format!(
            "Inserts a record into the {lower} table using currently set properties in {lower} object. If successful returns true.",
            lower = ctx.lower
        ),
        "bool",
    ));
    line(&mut code, 2, "public function Insert(): bool ");
    line(&mut code, 2, "{");
    line(&mut code, 3, "$query = \"INSERT INTO ");
    line(&mut code, 3, "\" . $this->table_name . \"");

    let assignments = build_insert_assignments(fields);
    if assignments.is_empty() {
        line(&mut code, 3, "SET \";");
    } else {
        line(&mut code, 3, "SET ");
        line(
            &mut code,
            4,
            &format!("{}\";", assignments.join(",\n\t\t\t\t")),
        );
    }

    code.push('\n');
    line(&mut code, 3, "//prepare query");
    line(&mut code, 3, "$stmt = $this->conn->prepare($query);");
    code.push('\n');
    line(&mut code, 3, "//Sanitize");
    for field in fields {
        line(
            &mut code,
            3,
            &format!(
                "$this->{}=htmlspecialchars(strip_tags($this->{}));",
                field, field
            ),
        );
    }
    code.push('\n');
    line(&mut code, 3, "//Bind parameters");
    code.push_str(&generate_bindings(fields));
    line(&mut code, 3, "if($stmt->execute())");
    line(&mut code, 3, "{");
    line(&mut code, 4, "$this->ID = $this->getLastInsertedId();");
    line(&mut code, 4, "return true;");
    line(&mut code, 3, "}");
    line(&mut code, 3, "return false;");
    line(&mut code, 2, "}");
    code.push('\n');
    code
}

/// Named parameter bindings in field order
fn generate_bindings(fields: &[String]) -> String {
    let mut code = String::new();
    for field in fields {
        line(
            &mut code,
            3,
            &format!("$stmt->bindParam(\":{}\", $this->{});", field, field),
        );
    }
    code
}

fn generate_update(ctx: &Context) -> String {
    let mut code = ctx.doc(
        MethodDoc::new(
            format!(
                "Updates a record in the {lower} table using currently set properties in {lower} object.",
                lower = ctx.lower
            ),
            format!(
                "Updates a record in the {lower} table using currently set properties in {lower} object for a given id. If successful returns true.",
                lower = ctx.lower
            ),
            "bool",
        )
        .param("int", "$ID Integer for ID to update"),
    );
    let excluded = UPDATE_EXCLUDED_PROPERTIES
        .iter()
        .map(|p| format!("\"{}\"", p))
        .collect::<Vec<_>>()
        .join(", ");

    line(&mut code, 2, "public function update($ID): bool ");
    line(&mut code, 2, "{");
    line(&mut code, 3, "$this->ID = $ID;");
    line(&mut code, 3, "$properties = get_object_vars($this);");
    line(&mut code, 3, "$keys = array_keys($properties);");
    line(
        &mut code,
        3,
        &format!("$propertiesToExclude = [{}];", excluded),
    );
    line(&mut code, 3, "$first = true;");
    line(&mut code, 3, "$query = \"UPDATE \" . $this->table_name . \"");
    line(&mut code, 4, "SET\";");
    line(&mut code, 3, "foreach($keys as $k)");
    line(&mut code, 3, "{");
    line(
        &mut code,
        4,
        "if(in_array($k, $propertiesToExclude) == false)",
    );
    line(&mut code, 4, "{");
    line(&mut code, 5, "if($first == true)");
    line(&mut code, 5, "{");
    line(
        &mut code,
        6,
        "$query .= \" \" . $k . \"='\" . $properties[$k] . \"'\";",
    );
    line(&mut code, 6, "$first=false;");
    line(&mut code, 5, "}");
    line(&mut code, 5, "else");
    line(&mut code, 5, "{");
    line(
        &mut code,
        6,
        "$query .= \", \" . $k . \"='\" . $properties[$k] . \"'\";",
    );
    line(&mut code, 5, "}");
    line(&mut code, 4, "}");
    line(&mut code, 3, "};");
    line(&mut code, 3, "$query .= \" WHERE ID = '\" . $ID . \"'\";");
    line(&mut code, 3, "//Prepare query");
    line(&mut code, 3, "$stmt = $this->conn->prepare($query);");
    line(&mut code, 3, "//Execute Query");
    push_execute_result(&mut code);
    line(&mut code, 2, "}");
    code.push('\n');
    code
}

fn generate_remove(ctx: &Context) -> String {
    let mut code = ctx.doc(MethodDoc::new(
        format!("Removes a record in {} by ID", ctx.lower),
        format!(
            "Prepares and executes a query to delete a record in the {} table. If successful, returns true.",
            ctx.lower
        ),
        "bool",
    ));
    line(&mut code, 2, "public function remove(): bool ");
    line(&mut code, 2, "{");
    line(&mut code, 3, "$query = \"DELETE * FROM");
    line(&mut code, 4, "\" . $this->table_name . \"");
    line(&mut code, 4, "WHERE Id = ?\";");
    line(&mut code, 3, "//Prepare query");
    line(&mut code, 3, "$stmt = $this->conn->prepare($query);");
    line(
        &mut code,
        3,
        "$this->id=htmlspecialchars(strip_tags($this->id));",
    );
    code.push('\n');
    line(&mut code, 3, "//bind id of record to delete");
    line(&mut code, 3, "$stmt->bindParam(1, $this->id);");
    line(&mut code, 3, "//Execute Query");
    push_execute_result(&mut code);
    line(&mut code, 2, "}");
    code
}

fn generate_closing() -> String {
    "\t}\n?>".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> ClassSpec {
        ClassSpec::new("Article", "articles", ["Title", "Body"])
    }

    fn render(spec: &ClassSpec) -> String {
        render_class(spec, &CodegenConfig::default())
    }

    fn assert_in_order(code: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            let pos = code[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {}", needle));
            from += pos + needle.len();
        }
    }

    #[test]
    fn test_opening() {
        let code = render(&article());
        assert!(code.starts_with(
            "<?php \n\t/**\n\t * Class used to handle CRUD operations related to articles. \n\t */\n\tclass Article\n\t{\n"
        ));
        assert!(code.contains(
            "\t\tpublic $Title;\n\t\tpublic $Body;\n\t\tprivate $conn;\n\t\tprivate $table_name = \"articles\";\n"
        ));
    }

    #[test]
    fn test_sections_in_order() {
        let code = render(&article());
        assert_in_order(
            &code,
            &[
                "class Article",
                "public function __construct($db)",
                "public function read()",
                "public function readOne() : void",
                "public function readPaging($from_record_num, $records_per_page)",
                "public function count(): int",
                "public function checkIfExists() : bool",
                "public function checkIfExists() : bool",
                "public function Insert(): bool",
                "public function update($ID): bool",
                "public function remove(): bool",
                "\t}\n?>",
            ],
        );
        assert!(code.ends_with("\t}\n?>"));
    }

    #[test]
    fn test_rename_get_if_exists() {
        let config = CodegenConfig {
            rename_get_if_exists: true,
            ..Default::default()
        };
        let code = render_class(&article(), &config);
        assert_eq!(code.matches("public function checkIfExists()").count(), 1);
        assert_in_order(
            &code,
            &[
                "public function checkIfExists() : bool",
                "public function getIfExists() : bool",
            ],
        );
    }

    #[test]
    fn test_read_one_assigns_fields_in_order() {
        let code = render(&article());
        assert!(code.contains(" WHERE Id = ?\n\t\t\t\t WHERE LIMIT 0,1\";"));
        assert!(code.contains(
            "\t\t\t$this->Title = $row['Title'];\n\t\t\t$this->Body = $row['Body'];\n\t\t}\n"
        ));
    }

    #[test]
    fn test_where_conditions() {
        let fields = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(
            build_where_conditions(&fields),
            vec![
                "WHERE A = \" . $this->A . \"",
                "AND B = \" . $this->B . \"",
                "AND C = \" . $this->C . \"",
            ]
        );
    }

    #[test]
    fn test_exists_query_terminated_on_last_condition() {
        let code = render(&article());
        assert!(code.contains(
            "$query = \"SELECT Count(*) as count\n\t\t\t\t FROM \" . $this->table_name . \"\n\t\t\t\tWHERE Title = \" . $this->Title . \"\n\t\t\t\tAND Body = \" . $this->Body . \"\";\n"
        ));
        assert!(code.contains("$query = \"SELECT *\n\t\t\t\t FROM"));
    }

    #[test]
    fn test_insert_assignments_two_per_line() {
        let fields: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        assert_eq!(build_insert_assignments(&fields), vec!["A=:A, B=:B", "C=:C"]);

        let spec = ClassSpec::new("Thing", "things", ["A", "B", "C"]);
        let code = render(&spec);
        assert!(code.contains("\t\t\tSET \n\t\t\t\tA=:A, B=:B,\n\t\t\t\tC=:C\";\n"));
    }

    #[test]
    fn test_insert_sanitizes_then_binds() {
        let code = render(&article());
        assert_in_order(
            &code,
            &[
                "//Sanitize",
                "$this->Title=htmlspecialchars(strip_tags($this->Title));",
                "$this->Body=htmlspecialchars(strip_tags($this->Body));",
                "//Bind parameters",
                "$stmt->bindParam(\":Title\", $this->Title);",
                "$stmt->bindParam(\":Body\", $this->Body);",
                "$this->ID = $this->getLastInsertedId();",
            ],
        );
    }

    #[test]
    fn test_update_excludes_internal_properties() {
        let code = render(&article());
        assert!(code.contains("$propertiesToExclude = [\"ID\", \"conn\", \"table_name\"];"));
        assert!(code.contains("$query .= \" WHERE ID = '\" . $ID . \"'\";"));
    }

    #[test]
    fn test_remove() {
        let code = render(&article());
        assert!(code.contains("$query = \"DELETE * FROM\n\t\t\t\t\" . $this->table_name . \"\n\t\t\t\tWHERE Id = ?\";"));
        assert!(code.contains("$stmt->bindParam(1, $this->id);"));
    }

    #[test]
    fn test_empty_spec_still_renders() {
        let code = render(&ClassSpec::default());
        assert!(code.contains("\tclass \n"));
        assert!(code.contains("private $table_name = \"\";"));
        assert!(code.contains("\t\t\t\t FROM \" . $this->table_name . \"\";\n"));
        assert!(code.contains("\t\t\tSET \";\n"));
        assert_eq!(code.matches("public $").count(), 0);
    }

    #[test]
    fn test_render_is_deterministic() {
        let spec = article();
        assert_eq!(render(&spec), render(&spec));

        let mut sink = Vec::new();
        emit_class(&spec, &CodegenConfig::default(), &mut sink).unwrap();
        emit_class(&spec, &CodegenConfig::default(), &mut sink).unwrap();
        let half = sink.len() / 2;
        assert_eq!(sink[..half], sink[half..]);
    }

    #[test]
    fn test_long_doc_text_is_wrapped() {
        let code = render(&ClassSpec::new("OrganizationMembership", "memberships", ["A"]));
        for doc_line in code.lines().filter(|l| l.starts_with("\t * ")) {
            let text = &doc_line["\t * ".len()..];
            if text.starts_with("@param") || text.starts_with("Class used") {
                continue;
            }
            let longest_word = text.split(' ').map(|w| w.len()).max().unwrap_or(0);
            assert!(text.len() <= 70 || longest_word > 70, "unwrapped: {}", text);
        }
    }
}
