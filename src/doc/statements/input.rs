/*!
# `INPUT <variable>`

## Purpose
Suspends execution and waits for an integer from the terminal.

## Remarks
The prompt is ` ? `. A reply that is not an integer prints
`INVALID NUMBER` and the prompt is shown again, as many times as it takes.

## Example
```text
10 INPUT N
20 PRINT N * N
RUN
 ? five
INVALID NUMBER
 ? 5
25
```

*/
