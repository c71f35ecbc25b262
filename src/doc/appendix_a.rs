/*!
# Error Messages

A line that fails prints exactly one of these messages. Errors in a
running program end the run; nothing is retried.

## `SYNTAX ERROR`
The line could not be understood. Nothing from the line is stored or
executed. This is also reported for statements that are not allowed in
direct mode (`REM`, `END`, `GOTO`, `IF`), for commands typed after a
line number, and for a leading line number of 0.

## `DIVIDE BY ZERO`
The right side of a `/` evaluated to zero.

## `VARIABLE NOT DEFINED`
An expression read a variable that has never been assigned.

## `LINE NUMBER ERROR`
`GOTO` or a successful `IF` named a line that is not in the program.
The target is checked when the jump happens, not when the line is typed.

## `INVALID NUMBER`
Not an error. `INPUT` prints this when the reply is not an integer and
asks again.

*/
