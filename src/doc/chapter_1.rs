/*!
# Expressions and Variables

All values are signed 32-bit integers. There are no strings, no floating
point numbers and no arrays.

Variable names start with a letter and continue with letters, digits or
underscores. Names are case sensitive, so `total` and `Total` are two
different variables. A variable springs into existence the first time
`LET` or `INPUT` assigns it. Reading a variable that was never assigned
is a `VARIABLE NOT DEFINED` error; there is no implicit zero.

```text
LET Count = 10
PRINT count
VARIABLE NOT DEFINED
```

## Operators

From lowest to highest precedence:

| Operator | Meaning |
|---|---|
| `+` `-` | Addition and subtraction |
| `*` `/` | Multiplication and division |
| `-` | Negation (prefix) |

Operators of the same precedence are evaluated left to right.
Parentheses override precedence. Division truncates toward zero and
dividing by zero is a `DIVIDE BY ZERO` error. Results that do not fit in
32 bits wrap around.

```text
PRINT 10 - 4 - 3
3
PRINT -7 / 2
-3
```

The relational operators `=`, `<` and `>` are not part of expressions.
`=` only appears in `LET`, and all three only appear between the two
expressions of an `IF`.

Keywords are upper case. `print` is an ordinary name, not a keyword.

*/
