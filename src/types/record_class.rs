use crate::types::code_table;

code_table! {
    /// Record class (RFC 1035 3.2.4, RFC 2136).
    RecordClass, "CLASS", {
        IN = 1, "IN";
        CS = 2, "CS";
        CH = 3, "CH";
        HS = 4, "HS";
        NONE = 254, "NONE";
        ANY = 255, "ANY";
    }
}
