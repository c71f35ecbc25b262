/*!
# `IF <expression> <comparison> <expression> THEN <line number>`

## Purpose
Jump to a line when a comparison holds, otherwise continue with the next line.

## Remarks
`<comparison>` is one of `=`, `<` or `>`. Both expressions are evaluated,
left first. The line number must be a plain integer and is only checked
when the jump is taken. Not allowed in direct mode.

## Example
```text
10 LET I = 1
20 PRINT I
30 LET I = I + 1
40 IF I < 4 THEN 20
RUN
1
2
3
```

*/
